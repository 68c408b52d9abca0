//! Database Models
//!
//! SurrealDB 文档结构。业务 id 以字符串字段保存 (`order_id` / `item_id` / `user_id`)，
//! 记录 id 使用同一个 UUID 作为 key。时间戳以 RFC 3339 (微秒, `Z`) 字符串保存，
//! 字符串排序即时间排序。

pub mod menu_item;
pub mod order;
pub mod user;

pub use menu_item::MenuItemRecord;
pub use order::OrderRecord;
pub use user::UserRecord;

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use super::repository::RepoError;

/// Format a timestamp for storage
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::Database(format!("Corrupt timestamp '{}': {}", raw, e)))
}

/// Parse a stored business id
pub fn parse_key(raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw).map_err(|e| RepoError::Database(format!("Corrupt id '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_sorts_chronologically() {
        let a = DateTime::parse_from_rfc3339("2024-05-01T09:59:59.5Z")
            .unwrap()
            .with_timezone(&Utc);
        let b = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let (fa, fb) = (format_timestamp(&a), format_timestamp(&b));
        assert_eq!(fb, "2024-05-01T10:00:00.000000Z");
        assert!(fa < fb);
        assert_eq!(parse_timestamp(&fa).unwrap(), a);
    }

    #[test]
    fn test_parse_key_rejects_garbage() {
        assert!(matches!(parse_key("nope"), Err(RepoError::Database(_))));
    }
}
