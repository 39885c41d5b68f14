//! User settings entity - one branding record per account.

use crate::{ColorTarget, FontFamily};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PRIMARY_COLOR: &str = "#3498db";
pub const DEFAULT_SECONDARY_COLOR: &str = "#2ecc71";
pub const DEFAULT_FONT_FAMILY: FontFamily = FontFamily::Arial;

/// Branding preferences of a single user.
///
/// Field names match the columns of the `user_settings` table so the same
/// type travels over every backend. Optional fields are omitted from the
/// wire when absent, letting the backend assign ids and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Backend-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Owner of the record (unique per table)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            id: None,
            user_id: None,
            logo_url: None,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.as_str().to_string(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl UserSettings {
    /// Default record stamped with an owner (never persisted by itself)
    pub fn default_for(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Copy of this record merged with the given owner
    pub fn with_owner(&self, user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            ..self.clone()
        }
    }

    /// Logo URL with "absent" and "empty" treated alike
    pub fn logo_url(&self) -> &str {
        self.logo_url.as_deref().unwrap_or("")
    }

    pub fn color(&self, target: ColorTarget) -> &str {
        match target {
            ColorTarget::Primary => &self.primary_color,
            ColorTarget::Secondary => &self.secondary_color,
        }
    }

    pub fn set_color(&mut self, target: ColorTarget, value: impl Into<String>) {
        match target {
            ColorTarget::Primary => self.primary_color = value.into(),
            ColorTarget::Secondary => self.secondary_color = value.into(),
        }
    }

    /// Font as a catalogue entry, if the stored name is one
    pub fn font(&self) -> Option<FontFamily> {
        self.font_family.parse().ok()
    }

    /// Compare only the user-editable fields
    pub fn same_preferences(&self, other: &Self) -> bool {
        self.logo_url() == other.logo_url()
            && self.primary_color == other.primary_color
            && self.secondary_color == other.secondary_color
            && self.font_family == other.font_family
    }

    /// Check if the record has been stored by a backend
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
