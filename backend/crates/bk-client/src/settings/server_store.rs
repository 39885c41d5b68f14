use crate::{BackendClient, ClientResult, SettingsStore};

use bk_core::UserSettings;

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

/// Records held by the `bk-server` settings service
pub struct ServerSettingsStore {
    client: BackendClient,
    access_token: Option<String>,
}

impl ServerSettingsStore {
    pub fn new(client: BackendClient, access_token: Option<&str>) -> Self {
        Self {
            client,
            access_token: access_token.map(String::from),
        }
    }
}

#[async_trait]
impl SettingsStore for ServerSettingsStore {
    async fn find(&self, user_id: Uuid) -> ClientResult<Option<UserSettings>> {
        let req = self.client.request(
            Method::GET,
            &format!("/user-settings/{}", user_id),
            self.access_token.as_deref(),
        );

        let settings: UserSettings = self.client.execute_json(req).await?;

        // The service answers unknown owners with a default that has no id
        Ok(settings.is_persisted().then_some(settings))
    }

    async fn upsert(&self, settings: &UserSettings) -> ClientResult<()> {
        let req = self
            .client
            .request(Method::POST, "/user-settings", self.access_token.as_deref())
            .json(settings);

        self.client.execute(req).await?;
        Ok(())
    }
}
