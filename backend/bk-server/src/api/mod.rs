pub mod error;
pub mod extractors;
pub mod user_settings;
