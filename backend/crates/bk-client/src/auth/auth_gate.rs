use crate::{AuthBackend, AuthUser, ClientResult, Session};

use log::{info, warn};
use tokio::sync::watch;
use uuid::Uuid;

/// Lifecycle of the session: `Resolving -> SignedOut <-> SignedIn`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Resolving,
    SignedOut,
    SignedIn(Session),
}

impl SessionState {
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            SessionState::SignedIn(session) => Some(session.user_id()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Resolving)
    }
}

/// What the front-end shows for the current session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView {
    Loading,
    CredentialForm,
    Settings(AuthUser),
}

/// Holds the session and publishes every change to subscribers
pub struct AuthGate<A> {
    backend: A,
    state: watch::Sender<SessionState>,
}

impl<A: AuthBackend> AuthGate<A> {
    pub fn new(backend: A) -> Self {
        let (state, _) = watch::channel(SessionState::Resolving);
        Self { backend, state }
    }

    pub fn backend(&self) -> &A {
        &self.backend
    }

    /// Settle the initial state from a stored access token.
    ///
    /// A token the backend no longer accepts leaves the gate signed out.
    pub async fn resolve(&self, stored_token: Option<&str>) -> SessionState {
        let next = match stored_token {
            None => SessionState::SignedOut,
            Some(token) => match self.backend.current_user(token).await {
                Ok(user) => SessionState::SignedIn(Session {
                    access_token: token.to_string(),
                    refresh_token: None,
                    expires_at: None,
                    user,
                }),
                Err(e) => {
                    warn!("Stored session rejected: {}", e);
                    SessionState::SignedOut
                }
            },
        };

        self.publish(next.clone());
        next
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session> {
        let session = self.backend.sign_in(email, password).await?;
        info!("User {} signed in", session.user_id());
        self.publish(SessionState::SignedIn(session.clone()));
        Ok(session)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> ClientResult<Option<Session>> {
        let session = self.backend.sign_up(email, password).await?;
        if let Some(ref session) = session {
            info!("User {} signed up", session.user_id());
            self.publish(SessionState::SignedIn(session.clone()));
        }
        Ok(session)
    }

    /// Drop the session. Backend failures are logged, never surfaced.
    pub async fn sign_out(&self) {
        if let Some(session) = self.session() {
            if let Err(e) = self.backend.sign_out(&session).await {
                warn!("Sign-out failed for {}: {}", session.user_id(), e);
            }
            info!("User {} signed out", session.user_id());
        }
        self.publish(SessionState::SignedOut);
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn session(&self) -> Option<Session> {
        match &*self.state.borrow() {
            SessionState::SignedIn(session) => Some(session.clone()),
            _ => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn view(&self) -> GateView {
        match &*self.state.borrow() {
            SessionState::Resolving => GateView::Loading,
            SessionState::SignedOut => GateView::CredentialForm,
            SessionState::SignedIn(session) => GateView::Settings(session.user.clone()),
        }
    }

    fn publish(&self, next: SessionState) {
        self.state.send_replace(next);
    }
}
