pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_context::AuthContext,
    user_settings::{
        upsert_user_settings_request::UpsertUserSettingsRequest,
        user_settings::{get_user_settings, upsert_user_settings},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
