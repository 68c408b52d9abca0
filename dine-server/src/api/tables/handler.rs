//! Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::order::{SettleResult, TableSession};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::ids::parse_table_id;

/// POST /api/tables/{table_id}/settle - 结账，桌台所有未付订单标记为 paid
pub async fn settle(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<Json<SettleResult>> {
    let table_id = parse_table_id(&table_id)?;
    let count = state.orders.settle_table(table_id).await?;
    Ok(Json(SettleResult::cleared(count)))
}

/// GET /api/tables/{table_id}/session - 桌台会话
pub async fn session(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<Json<TableSession>> {
    let table_id = parse_table_id(&table_id)?;
    let session = state.orders.get_session(table_id).await?;
    Ok(Json(session))
}
