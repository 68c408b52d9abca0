//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::order::{Order, OrderListQuery, PlaceOrderRequest, StatusQuery, StatusTarget};

use crate::api::extract::{ApiJson, ApiQuery};
use crate::core::ServerState;
use crate::orders::OrderError;
use crate::utils::ids::parse_record_id;
use crate::utils::{AppError, AppResult};

fn reject(err: OrderError) -> AppError {
    if matches!(err, OrderError::InvalidLine { .. } | OrderError::Validation(_)) {
        tracing::warn!(error = %err, "Order rejected");
    }
    err.into()
}

/// POST /api/orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<PlaceOrderRequest>,
) -> AppResult<Json<Order>> {
    let order = state.orders.place_order(payload).await.map_err(reject)?;
    Ok(Json(order))
}

/// GET /api/orders - 获取订单列表
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders.list_orders(query.status.as_deref()).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id} - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let id = parse_record_id(&id)?;
    let order = state.orders.get_order(id).await?;
    Ok(Json(order))
}

/// PATCH /api/orders/{id}/status - 推进订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> AppResult<Json<Order>> {
    let id = parse_record_id(&id)?;
    let target = StatusTarget::parse(&query.status);
    let order = state.orders.advance_status(id, target).await?;
    Ok(Json(order))
}
