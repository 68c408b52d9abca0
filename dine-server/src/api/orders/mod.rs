//! Order API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/orders | POST | 下单 (合并到桌台活动订单或新建) |
//! | /api/orders | GET | 订单列表 (?status=) |
//! | /api/orders/{id} | GET | 单个订单 |
//! | /api/orders/{id}/status | PATCH | 推进状态 (?status=ready\|served) |

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", patch(handler::update_status))
}
