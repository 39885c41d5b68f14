use crate::{AuthBackend, AuthGate, Locale, Message};

use std::fmt;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignedIn,
    /// Account created; the backend waits for e-mail confirmation
    ConfirmationRequired,
    Failed,
    /// A submission was already in flight
    Ignored,
}

/// E-mail/password form shown while signed out
#[derive(Default)]
pub struct CredentialForm {
    pub email: String,
    pub password: String,
    mode: CredentialMode,
    in_flight: bool,
    error: Option<String>,
    notice: Option<String>,
    locale: Locale,
}

impl fmt::Debug for CredentialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("mode", &self.mode)
            .field("in_flight", &self.in_flight)
            .field("error", &self.error)
            .field("notice", &self.notice)
            .field("locale", &self.locale)
            .finish()
    }
}

impl CredentialForm {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> CredentialMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            CredentialMode::SignIn => CredentialMode::SignUp,
            CredentialMode::SignUp => CredentialMode::SignIn,
        };
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            CredentialMode::SignIn => self.locale.text(Message::SignIn),
            CredentialMode::SignUp => self.locale.text(Message::SignUp),
        }
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.in_flight {
            self.locale.text(Message::Processing)
        } else {
            self.title()
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            CredentialMode::SignIn => self.locale.text(Message::SwitchToSignUp),
            CredentialMode::SignUp => self.locale.text(Message::SwitchToSignIn),
        }
    }

    /// Sign in or sign up through the gate, depending on the mode.
    ///
    /// Clears the previous error first. A failure keeps the backend's own
    /// message when it sent one, otherwise a generic localized one.
    pub async fn submit<A: AuthBackend>(&mut self, gate: &AuthGate<A>) -> SubmitOutcome {
        if self.in_flight {
            return SubmitOutcome::Ignored;
        }

        self.in_flight = true;
        self.error = None;
        self.notice = None;

        let result = match self.mode {
            CredentialMode::SignIn => gate
                .sign_in(&self.email, &self.password)
                .await
                .map(|_| SubmitOutcome::SignedIn),
            CredentialMode::SignUp => {
                gate.sign_up(&self.email, &self.password)
                    .await
                    .map(|session| match session {
                        Some(_) => SubmitOutcome::SignedIn,
                        None => SubmitOutcome::ConfirmationRequired,
                    })
            }
        };

        self.in_flight = false;

        match result {
            Ok(outcome) => {
                if outcome == SubmitOutcome::ConfirmationRequired {
                    self.notice = Some(self.locale.text(Message::ConfirmationSent).to_string());
                }
                outcome
            }
            Err(e) => {
                debug!("Credential submission failed: {}", e);
                let message = e
                    .backend_message()
                    .map(String::from)
                    .unwrap_or_else(|| self.locale.text(Message::AuthFailed).to_string());
                self.error = Some(message);
                SubmitOutcome::Failed
            }
        }
    }
}
