pub(crate) mod auth_backend;
pub(crate) mod auth_gate;
pub(crate) mod credential_form;
pub(crate) mod gotrue_auth;
pub(crate) mod session;

pub use auth_backend::AuthBackend;
pub use auth_gate::{AuthGate, GateView, SessionState};
pub use credential_form::{CredentialForm, CredentialMode, SubmitOutcome};
pub use gotrue_auth::GoTrueAuth;
pub use session::{AuthUser, Session};
