//! Shared types for the restaurant ordering backend
//!
//! Data contracts used by the server and its tests: the order document,
//! catalog and guest models, the unified error type and response envelope.

pub mod error;
pub mod models;
pub mod order;
pub mod serde_helpers;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
