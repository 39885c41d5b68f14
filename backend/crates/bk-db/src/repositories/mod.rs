pub mod user_settings_repository;
