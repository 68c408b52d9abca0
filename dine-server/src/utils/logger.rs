//! Logging Infrastructure
//!
//! Console output, or a daily rolling file when a log directory is configured
//! and exists. `RUST_LOG` takes precedence over the configured level.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// 嵌入式数据库的内部日志默认压到 warn
const QUIET_TARGETS: &[&str] = &["surrealdb", "surrealdb_core", "rocksdb"];

/// Build the filter directive for a base level
pub fn filter_directive(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    let level = match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => "info".to_string(),
    };
    QUIET_TARGETS
        .iter()
        .fold(level, |acc, target| format!("{acc},{target}=warn"))
}

/// Initialize the logger with optional file output
///
/// Safe to call more than once: later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level.unwrap_or("info"))));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if let Some(dir) = log_dir.map(Path::new).filter(|p| p.is_dir()) {
        let file_appender = tracing_appender::rolling::daily(dir, "dine-server");
        let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
        return;
    }

    let _ = subscriber.try_init();
}
