/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | DATABASE_PATH | ./data/dine.db | 数据库路径，`memory` 使用内存引擎 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，存在时按天滚动写文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | FRONTEND_URL | (未设置) | 额外允许的 CORS 来源 |
/// | SEED_MENU | true | 空菜单时写入招牌菜 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=memory HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SurrealDB 数据路径
    pub database_path: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 前端地址 (CORS)
    pub frontend_url: Option<String>,
    pub seed_menu: bool,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/dine.db".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            frontend_url: std::env::var("FRONTEND_URL").ok().filter(|u| !u.is_empty()),
            seed_menu: std::env::var("SEED_MENU")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 测试用配置：内存数据库，不写入招牌菜
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            database_path: crate::db::MEMORY_PATH.to_string(),
            log_level: "debug".to_string(),
            log_dir: None,
            environment: "test".to_string(),
            frontend_url: None,
            seed_menu: false,
            request_timeout_ms: 30000,
        }
    }
}
