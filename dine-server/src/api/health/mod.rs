//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 简单健康检查 (旧探针路径) |
//! | /health | GET | 简单健康检查 |
//!
//! ```json
//! { "status": "online", "system": "Dine Server", "version": "0.1.0" }
//! ```

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    system: &'static str,
    version: &'static str,
}

/// GET / 和 GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online",
        system: "Dine Server",
        version: env!("CARGO_PKG_VERSION"),
    })
}
