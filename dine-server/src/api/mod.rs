//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`orders`] - 订单接口
//! - [`tables`] - 桌台会话 / 结账接口
//! - [`menu`] - 菜单管理接口
//! - [`users`] - 顾客档案接口

pub mod extract;

pub mod health;
pub mod menu;
pub mod orders;
pub mod tables;
pub mod users;

use std::time::Duration;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::{Config, ServerState};

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Vite dev / preview origins
const DEV_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:4173",
    "http://127.0.0.1:4173",
];

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(tables::router())
        .merge(menu::router())
        .merge(users::router())
}

/// Allowed CORS origins: dev origins plus `FRONTEND_URL`
pub fn cors_origins(config: &Config) -> Vec<HeaderValue> {
    let mut origins: Vec<HeaderValue> = DEV_ORIGINS
        .iter()
        .copied()
        .map(HeaderValue::from_static)
        .collect();
    if let Some(url) = &config.frontend_url {
        match HeaderValue::from_str(url.trim_end_matches('/')) {
            Ok(origin) => origins.push(origin),
            Err(e) => tracing::warn!(url = %url, error = %e, "Ignoring invalid FRONTEND_URL"),
        }
    }
    origins
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and the in-process tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(cors_origins(&state.config)))
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any());

    build_router()
        // Timeout - 408 when a handler exceeds REQUEST_TIMEOUT_MS
        .layer(TimeoutLayer::new(Duration::from_millis(
            state.config.request_timeout_ms,
        )))
        // CORS - Handle cross-origin requests
        .layer(cors)
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origins_include_frontend_url() {
        let mut config = Config::for_tests();
        assert_eq!(cors_origins(&config).len(), 4);

        config.frontend_url = Some("https://dine.example.com/".to_string());
        let origins = cors_origins(&config);
        assert_eq!(origins.len(), 5);
        assert_eq!(origins[4], "https://dine.example.com");
    }
}
