use crate::{ClientError, ClientResult, LoadOutcome, SettingsStore};

use bk_core::UserSettings;

use log::{debug, error, warn};
use uuid::Uuid;

/// Read/write access to a user's settings record
pub struct SettingsClient<S> {
    store: S,
}

impl<S: SettingsStore> SettingsClient<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Settings of `user_id`, or the default record.
    ///
    /// Never fails: a missing row and a backend error both yield
    /// `UserSettings::default()`. Use [`SettingsClient::load`] to tell them apart.
    pub async fn fetch(&self, user_id: Uuid) -> UserSettings {
        match self.load(user_id).await {
            LoadOutcome::Found(settings) => settings,
            LoadOutcome::NotFound => {
                debug!("No user settings stored for {}, using defaults", user_id);
                UserSettings::default()
            }
            LoadOutcome::Unavailable(e) => {
                error!("Error fetching user settings: {}", e);
                UserSettings::default()
            }
        }
    }

    pub async fn load(&self, user_id: Uuid) -> LoadOutcome {
        match self.store.find(user_id).await {
            Ok(Some(settings)) => LoadOutcome::Found(settings),
            Ok(None) => LoadOutcome::NotFound,
            Err(e) => LoadOutcome::Unavailable(e),
        }
    }

    /// Insert or update the record keyed on its owner.
    ///
    /// A record without `user_id` is rejected before any request is sent.
    pub async fn save(&self, settings: &UserSettings) -> ClientResult<()> {
        let Some(user_id) = settings.user_id else {
            warn!("Refusing to save user settings without an owner");
            return Err(ClientError::validation("user_settings.user_id is required"));
        };

        self.store.upsert(settings).await.inspect_err(|e| {
            error!("Error saving user settings for {}: {}", user_id, e);
        })?;

        debug!("Saved user settings for {}", user_id);
        Ok(())
    }
}
