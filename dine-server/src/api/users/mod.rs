//! Guest Profile API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/users/check | POST | 手机号是否已注册 |
//! | /api/users/login | POST | 登录 (按手机号 upsert) |
//! | /api/users/{id} | GET | 顾客档案 |
//! | /api/users/{id}/preferences | PUT | 追加偏好备注 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/users", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/check", post(handler::check))
        .route("/login", post(handler::login))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/preferences", put(handler::add_preference))
}
