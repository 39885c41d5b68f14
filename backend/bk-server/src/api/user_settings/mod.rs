pub mod upsert_user_settings_request;
#[allow(clippy::module_inception)]
pub mod user_settings;
