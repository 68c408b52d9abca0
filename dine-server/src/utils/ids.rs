//! Boundary identifier parsing
//!
//! Clients see opaque string ids. They are parsed here, before any store
//! lookup, so a malformed id is a 400 and a well-formed but unknown id is a 404.

use uuid::Uuid;

use super::{AppError, AppResult, ErrorCode};

/// Parse an opaque record id (orders, menu items, users)
pub fn parse_record_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::invalid_id(raw))
}

/// Parse a table number from a path segment
pub fn parse_table_id(raw: &str) -> AppResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::with_message(ErrorCode::InvalidTableId, "Invalid Table ID").with_detail("table_id", raw)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_record_id(&id.to_string()).unwrap(), id);

        let err = parse_record_id("665f1c2e9b1e8a3d4c5b6a79").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_parse_table_id() {
        assert_eq!(parse_table_id("12").unwrap(), 12);
        assert_eq!(parse_table_id("-1").unwrap(), -1);

        let err = parse_table_id("twelve").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTableId);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);

        assert!(parse_table_id("1.5").is_err());
        assert!(parse_table_id("").is_err());
    }
}
