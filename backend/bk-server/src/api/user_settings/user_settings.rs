//! User settings REST API handlers

use crate::{ApiError, ApiResult, AppState, AuthContext, UpsertUserSettingsRequest};

use bk_core::UserSettings;
use bk_db::UserSettingsRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /user-settings/{user_id}
///
/// The stored record, or a default stamped with `user_id` (without an `id`)
/// when the user has never saved.
pub async fn get_user_settings(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserSettings>> {
    let user_id = Uuid::parse_str(&user_id)?;
    auth.authorize(user_id)?;

    let repo = UserSettingsRepository::new(state.pool.clone());
    let settings = repo
        .find_by_user(user_id)
        .await?
        .unwrap_or_else(|| UserSettings::default_for(user_id));

    Ok(Json(settings))
}

/// POST /user-settings
///
/// Insert or update the record keyed on `user_id`
pub async fn upsert_user_settings(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(req): Json<UpsertUserSettingsRequest>,
) -> ApiResult<Json<UserSettings>> {
    let user_id = match req.user_id.as_deref().map(str::trim) {
        None | Some("") => {
            return Err(ApiError::validation("user_id is required", Some("user_id")));
        }
        Some(raw) => Uuid::parse_str(raw).map_err(|e| {
            ApiError::validation(format!("Invalid UUID format: {}", e), Some("user_id"))
        })?,
    };
    auth.authorize(user_id)?;

    let repo = UserSettingsRepository::new(state.pool.clone());
    let stored = repo.upsert(&req.into_settings(user_id)).await?;

    log::info!("Saved user settings for {}", user_id);
    Ok(Json(stored))
}
