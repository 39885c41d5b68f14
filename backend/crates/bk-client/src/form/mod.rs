pub(crate) mod form_message;
pub(crate) mod settings_form;

pub use form_message::{FormMessage, MESSAGE_TTL, MessageKind};
pub use settings_form::{FormPhase, LOGO_PLACEHOLDER_URL, SaveOutcome, SettingsForm};
