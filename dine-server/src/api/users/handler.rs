//! Guest Profile API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use shared::models::{AddPreference, User, UserCheck, UserCheckResult, UserLogin};
use uuid::Uuid;

use crate::api::extract::ApiJson;
use crate::core::ServerState;
use crate::utils::ids::parse_record_id;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};

const DEFAULT_GUEST_NAME: &str = "Guest";

fn user_not_found(id: Uuid) -> AppError {
    AppError::with_message(ErrorCode::UserNotFound, "User not found").with_detail("id", id.to_string())
}

fn require_phone(phone: &str) -> AppResult<&str> {
    let phone = phone.trim();
    if phone.is_empty() {
        tracing::warn!("Login without phone number");
        return Err(AppError::with_message(ErrorCode::PhoneRequired, "Phone is required"));
    }
    if phone.len() > MAX_SHORT_TEXT_LEN {
        return Err(AppError::validation(format!(
            "phone is too long ({} chars, max {MAX_SHORT_TEXT_LEN})",
            phone.len()
        )));
    }
    Ok(phone)
}

/// POST /api/users/check - 手机号是否已注册
pub async fn check(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<UserCheck>,
) -> AppResult<Json<UserCheckResult>> {
    let user = state.users.find_by_phone(payload.phone.trim()).await?;
    Ok(Json(UserCheckResult {
        exists: user.is_some(),
        name: user.map(|u| u.name),
    }))
}

/// POST /api/users/login - 登录
///
/// 已有手机号: 更新 lastVisit，visitCount + 1，提供 name / preferences 时覆盖。
/// 新手机号: 创建档案，name 缺省为 "Guest"。
pub async fn login(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<UserLogin>,
) -> AppResult<Json<User>> {
    let phone = require_phone(&payload.phone)?;
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    let name = payload.name.filter(|n| !n.trim().is_empty());

    let user = match state.users.find_by_phone(phone).await? {
        Some(mut user) => {
            user.last_visit = Some(Utc::now());
            user.visit_count += 1;
            if let Some(name) = name {
                user.name = name;
            }
            if let Some(preferences) = payload.preferences {
                user.preferences = preferences;
            }
            let user = state.users.replace(user).await?;
            tracing::info!(user_id = %user.id, visits = user.visit_count, "Returning guest logged in");
            user
        }
        None => {
            let user = User {
                id: Uuid::new_v4(),
                name: name.unwrap_or_else(|| DEFAULT_GUEST_NAME.to_string()),
                phone: phone.to_string(),
                preferences: payload.preferences.unwrap_or_default(),
                visit_count: 1,
                last_visit: Some(Utc::now()),
            };
            let user = state.users.insert(user).await?;
            tracing::info!(user_id = %user.id, "New guest registered");
            user
        }
    };
    Ok(Json(user))
}

/// GET /api/users/{id} - 顾客档案
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_record_id(&id)?;
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok(Json(user))
}

/// PUT /api/users/{id}/preferences - 追加偏好备注 (去重)
pub async fn add_preference(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<AddPreference>,
) -> AppResult<Json<User>> {
    let preference = payload
        .preference
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::RequiredField, "Preference required")
                .with_detail("field", "preference")
        })?;
    validate_optional_text(&Some(preference.clone()), "preference", MAX_NOTE_LEN)?;
    let id = parse_record_id(&id)?;

    let mut user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    if user.preferences.add_note(&preference) {
        user = state.users.replace(user).await?;
    }
    Ok(Json(user))
}
