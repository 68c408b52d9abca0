//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{MenuItem, MenuItemCreate, MenuItemDeleted, MenuItemUpdate};
use uuid::Uuid;

use crate::api::extract::ApiJson;
use crate::core::ServerState;
use crate::utils::ids::parse_record_id;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_price,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn item_not_found(id: Uuid) -> AppError {
    AppError::with_message(ErrorCode::MenuItemNotFound, "Item not found")
        .with_detail("id", id.to_string())
}

fn invalid_price(err: AppError) -> AppError {
    AppError::with_message(ErrorCode::MenuItemInvalidPrice, err.message)
}

async fn load(state: &ServerState, id: Uuid) -> AppResult<MenuItem> {
    state
        .menu
        .find_by_id(id)
        .await?
        .ok_or_else(|| item_not_found(id))
}

/// GET /api/menu - 获取全部菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.menu.find_all().await?;
    Ok(Json(items))
}

/// POST /api/menu - 新增菜品
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_price(payload.price, "price").map_err(invalid_price)?;

    let item = state
        .menu
        .insert(MenuItem::from_create(Uuid::new_v4(), payload))
        .await?;
    tracing::info!(item_id = %item.id, name = %item.name, "Menu item created");
    Ok(Json(item))
}

/// PATCH /api/menu/{id} - 部分更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let id = parse_record_id(&id)?;
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(category) = &payload.category {
        validate_required_text(category, "category", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    if let Some(price) = payload.price {
        validate_price(price, "price").map_err(invalid_price)?;
    }

    let mut item = load(&state, id).await?;
    item.apply(payload);
    let item = state.menu.replace(item).await?;
    Ok(Json(item))
}

/// PATCH /api/menu/{id}/toggle - 切换可售状态
pub async fn toggle(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let id = parse_record_id(&id)?;
    let mut item = load(&state, id).await?;
    item.is_available = !item.is_available;
    let item = state.menu.replace(item).await?;
    tracing::info!(item_id = %item.id, available = item.is_available, "Menu item toggled");
    Ok(Json(item))
}

/// DELETE /api/menu/{id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MenuItemDeleted>> {
    let id = parse_record_id(&raw_id)?;
    if !state.menu.delete(id).await? {
        return Err(item_not_found(id));
    }
    tracing::info!(item_id = %id, "Menu item deleted");
    Ok(Json(MenuItemDeleted {
        status: "deleted".to_string(),
        id: raw_id,
    }))
}
