use crate::{BackendClient, ClientError, ClientResult, SettingsStore};

use bk_core::UserSettings;

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

const TABLE_PATH: &str = "/rest/v1/user_settings";
const UPSERT_PREFER: &str = "resolution=merge-duplicates,return=minimal";

/// `user_settings` table of the hosted backend, reached over its REST gateway
pub struct PostgrestSettingsStore {
    client: BackendClient,
    access_token: Option<String>,
}

impl PostgrestSettingsStore {
    /// Requests run with the signed-in user's token so row-level policies apply;
    /// without one they fall back to the anonymous key.
    pub fn new(client: BackendClient, access_token: Option<&str>) -> Self {
        Self {
            client,
            access_token: access_token.map(String::from),
        }
    }
}

#[async_trait]
impl SettingsStore for PostgrestSettingsStore {
    async fn find(&self, user_id: Uuid) -> ClientResult<Option<UserSettings>> {
        let path = format!("{}?select=*&user_id=eq.{}", TABLE_PATH, user_id);
        let req = self
            .client
            .request(Method::GET, &path, self.access_token.as_deref());

        let mut rows: Vec<UserSettings> = self.client.execute_json(req).await?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(ClientError::api_error(
                "MULTIPLE_ROWS",
                format!("expected one user_settings row for {}, found {}", user_id, n),
            )),
        }
    }

    async fn upsert(&self, settings: &UserSettings) -> ClientResult<()> {
        let path = format!("{}?on_conflict=user_id", TABLE_PATH);
        let req = self
            .client
            .request(Method::POST, &path, self.access_token.as_deref())
            .header("Prefer", UPSERT_PREFER)
            .json(settings);

        self.client.execute(req).await?;
        Ok(())
    }
}
