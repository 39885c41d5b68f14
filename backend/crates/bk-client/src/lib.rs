//! bk-client library
//!
//! Talks to the hosted backend (auth + `user_settings` table) or to the
//! first-party settings service, and drives the auth gate and settings form
//! state machines used by the `brandkit` front-end.

pub mod auth;
pub mod client;
pub mod form;
pub mod i18n;
pub mod settings;

#[cfg(test)]
mod tests;

pub use auth::{
    AuthBackend, AuthGate, AuthUser, CredentialForm, CredentialMode, GateView, GoTrueAuth,
    Session, SessionState, SubmitOutcome,
};
pub use client::{BackendClient, ClientError, ClientResult};
pub use form::{
    FormMessage, FormPhase, LOGO_PLACEHOLDER_URL, MESSAGE_TTL, MessageKind, SaveOutcome,
    SettingsForm,
};
pub use i18n::{Locale, LocaleError, Message};
pub use settings::{
    LoadOutcome, PostgrestSettingsStore, ServerSettingsStore, SettingsClient, SettingsStore,
};
