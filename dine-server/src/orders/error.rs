use shared::error::{AppError, ErrorCode};
use thiserror::Error;
use uuid::Uuid;

use crate::db::repository::RepoError;

/// Order service errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid order line #{index}: {message}")]
    InvalidLine { index: usize, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, "Order not found")
                    .with_detail("order_id", id.to_string())
            }
            OrderError::InvalidLine { index, message } => {
                AppError::with_message(ErrorCode::OrderLineInvalid, message)
                    .with_detail("index", index)
            }
            OrderError::Validation(msg) => AppError::validation(msg),
            OrderError::Repo(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_error_status_mapping() {
        let not_found: AppError = OrderError::NotFound(Uuid::nil()).into();
        assert_eq!(not_found.http_status(), StatusCode::NOT_FOUND);

        let bad_line: AppError = OrderError::InvalidLine {
            index: 1,
            message: "quantity must be positive, got 0".to_string(),
        }
        .into();
        assert_eq!(bad_line.code, ErrorCode::OrderLineInvalid);
        assert_eq!(bad_line.http_status(), StatusCode::BAD_REQUEST);

        let db: AppError = OrderError::Repo(RepoError::Database("disk".into())).into();
        assert_eq!(db.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
