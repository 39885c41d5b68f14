use bk_core::{DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, UserSettings};

use serde::Deserialize;
use uuid::Uuid;

/// Body of `POST /user-settings`
///
/// Colours and font fall back to the defaults when omitted. `id` and the
/// timestamps are accepted but ignored; the store owns them.
#[derive(Debug, Deserialize)]
pub struct UpsertUserSettingsRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl UpsertUserSettingsRequest {
    pub fn into_settings(self, user_id: Uuid) -> UserSettings {
        UserSettings {
            logo_url: self.logo_url,
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            font_family: self.font_family,
            ..UserSettings::default_for(user_id)
        }
    }
}

fn default_primary_color() -> String {
    DEFAULT_PRIMARY_COLOR.to_string()
}

fn default_secondary_color() -> String {
    DEFAULT_SECONDARY_COLOR.to_string()
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.as_str().to_string()
}
