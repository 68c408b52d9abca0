//! Table API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/tables/{table_id}/settle | POST | 结账清台 |
//! | /api/tables/{table_id}/session | GET | 当前桌台会话 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{table_id}/settle", post(handler::settle))
        .route("/{table_id}/session", get(handler::session))
}
