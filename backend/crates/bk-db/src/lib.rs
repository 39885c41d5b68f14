pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::user_settings_repository::UserSettingsRepository;

/// Embedded schema migrations for the settings store
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
