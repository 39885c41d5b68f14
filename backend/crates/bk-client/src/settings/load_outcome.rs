use crate::ClientError;

use bk_core::UserSettings;

/// Result of a settings read that keeps "never saved" apart from "unreachable"
#[derive(Debug)]
pub enum LoadOutcome {
    Found(UserSettings),
    NotFound,
    Unavailable(ClientError),
}

impl LoadOutcome {
    /// Collapse to a record: anything but `Found` becomes the default record
    pub fn into_record(self) -> UserSettings {
        match self {
            LoadOutcome::Found(settings) => settings,
            LoadOutcome::NotFound | LoadOutcome::Unavailable(_) => UserSettings::default(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LoadOutcome::Found(_))
    }
}
