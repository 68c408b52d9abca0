//! Menu API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/menu | GET | 全部菜品 |
//! | /api/menu | POST | 新增菜品 |
//! | /api/menu/{id} | PATCH | 部分更新 |
//! | /api/menu/{id} | DELETE | 删除菜品 |
//! | /api/menu/{id}/toggle | PATCH | 切换可售状态 |

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", patch(handler::update).delete(handler::delete))
        .route("/{id}/toggle", patch(handler::toggle))
}
