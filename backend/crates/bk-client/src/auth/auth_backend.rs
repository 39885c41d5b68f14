use crate::{AuthUser, ClientResult, Session};

use async_trait::async_trait;

/// Account operations of the auth backend
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session>;

    /// `None` when the backend holds the account until the e-mail is confirmed
    async fn sign_up(&self, email: &str, password: &str) -> ClientResult<Option<Session>>;

    async fn sign_out(&self, session: &Session) -> ClientResult<()>;

    /// Account behind a previously issued access token
    async fn current_user(&self, access_token: &str) -> ClientResult<AuthUser>;
}
