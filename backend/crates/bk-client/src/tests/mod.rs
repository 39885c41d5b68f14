
use crate::{AuthBackend, AuthUser, ClientError, ClientResult, Session, SettingsStore};

use bk_core::UserSettings;

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

/// In-memory table with the same one-row-per-owner rule as the real one
#[derive(Default)]
pub(crate) struct MockStore {
    pub(crate) rows: Mutex<Vec<UserSettings>>,
    pub(crate) fail_find: bool,
    pub(crate) fail_upsert: bool,
    pub(crate) finds: AtomicUsize,
    pub(crate) upserts: AtomicUsize,
}

impl MockStore {
    pub(crate) fn with_row(settings: UserSettings) -> Self {
        Self {
            rows: Mutex::new(vec![settings]),
            ..Self::default()
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_find: true,
            fail_upsert: true,
            ..Self::default()
        }
    }

    pub(crate) fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub(crate) fn find_calls(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub(crate) fn upsert_calls(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsStore for MockStore {
    async fn find(&self, user_id: Uuid) -> ClientResult<Option<UserSettings>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        if self.fail_find {
            return Err(ClientError::api_error("503", "Service Unavailable"));
        }

        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.user_id == Some(user_id)).cloned())
    }

    async fn upsert(&self, settings: &UserSettings) -> ClientResult<()> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_upsert {
            return Err(ClientError::api_error("42501", "permission denied"));
        }

        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.user_id == settings.user_id) {
            Some(row) => {
                let id = row.id;
                *row = UserSettings {
                    id,
                    ..settings.clone()
                };
            }
            None => rows.push(UserSettings {
                id: Some(Uuid::new_v4()),
                ..settings.clone()
            }),
        }
        Ok(())
    }
}

pub(crate) enum Failure {
    /// Error body with a message from the backend
    Api(&'static str),
    /// Failure without a backend message
    Transport,
}

impl Failure {
    fn to_error(&self) -> ClientError {
        match self {
            Failure::Api(message) => ClientError::api_error("invalid_grant", *message),
            Failure::Transport => {
                let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
                ClientError::from(err)
            }
        }
    }
}

pub(crate) struct MockAuth {
    pub(crate) user: AuthUser,
    pub(crate) valid_token: &'static str,
    pub(crate) sign_in_failure: Option<Failure>,
    pub(crate) requires_confirmation: bool,
    pub(crate) fail_sign_out: bool,
    pub(crate) sign_outs: AtomicUsize,
}

impl Default for MockAuth {
    fn default() -> Self {
        Self {
            user: AuthUser {
                id: Uuid::new_v4(),
                email: Some("user@example.com".to_string()),
            },
            valid_token: "valid-token",
            sign_in_failure: None,
            requires_confirmation: false,
            fail_sign_out: false,
            sign_outs: AtomicUsize::new(0),
        }
    }
}

impl MockAuth {
    fn session(&self) -> Session {
        session_for(self.user.clone(), self.valid_token)
    }
}

#[async_trait]
impl AuthBackend for MockAuth {
    async fn sign_in(&self, _email: &str, _password: &str) -> ClientResult<Session> {
        match self.sign_in_failure {
            Some(ref failure) => Err(failure.to_error()),
            None => Ok(self.session()),
        }
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> ClientResult<Option<Session>> {
        if let Some(ref failure) = self.sign_in_failure {
            return Err(failure.to_error());
        }
        Ok((!self.requires_confirmation).then(|| self.session()))
    }

    async fn sign_out(&self, _session: &Session) -> ClientResult<()> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        if self.fail_sign_out {
            return Err(Failure::Transport.to_error());
        }
        Ok(())
    }

    async fn current_user(&self, access_token: &str) -> ClientResult<AuthUser> {
        if access_token == self.valid_token {
            Ok(self.user.clone())
        } else {
            Err(ClientError::api_error("401", "invalid JWT"))
        }
    }
}

pub(crate) fn session_for(user: AuthUser, access_token: &str) -> Session {
    Session {
        access_token: access_token.to_string(),
        refresh_token: Some("refresh".to_string()),
        expires_at: None,
        user,
    }
}

pub(crate) fn session_with_id(user_id: Uuid) -> Session {
    session_for(
        AuthUser {
            id: user_id,
            email: None,
        },
        "token",
    )
}
