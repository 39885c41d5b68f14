use crate::ClientResult;

use bk_core::UserSettings;

use async_trait::async_trait;
use uuid::Uuid;

/// Remote table holding at most one settings record per owner
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// The stored record of `user_id`, or `None` when it has never been saved
    async fn find(&self, user_id: Uuid) -> ClientResult<Option<UserSettings>>;

    /// Insert or update the record keyed on its `user_id`
    async fn upsert(&self, settings: &UserSettings) -> ClientResult<()>;
}

#[async_trait]
impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    async fn find(&self, user_id: Uuid) -> ClientResult<Option<UserSettings>> {
        (**self).find(user_id).await
    }

    async fn upsert(&self, settings: &UserSettings) -> ClientResult<()> {
        (**self).upsert(settings).await
    }
}
