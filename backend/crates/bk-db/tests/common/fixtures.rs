use bk_core::{FontFamily, UserSettings};

use uuid::Uuid;

/// Creates a customized settings record for an owner
pub fn create_test_settings(user_id: Uuid) -> UserSettings {
    UserSettings {
        id: None,
        user_id: Some(user_id),
        logo_url: Some("https://example.com/logo.png".to_string()),
        primary_color: "#112233".to_string(),
        secondary_color: "#445566".to_string(),
        font_family: FontFamily::Georgia.as_str().to_string(),
        created_at: None,
        updated_at: None,
    }
}
