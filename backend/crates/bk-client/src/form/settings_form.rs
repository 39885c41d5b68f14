//! Headless settings editor.
//!
//! Mirrors the edit surface of the settings page: a logo URL, a font picker,
//! and one colour picker shared by two tabs (primary and secondary), each tab
//! also having its own text input. The form moves through
//! `Loading -> Ready -> Saving -> Ready`; edits are ignored while it is busy.

use crate::{
    ClientError, FormMessage, LoadOutcome, Locale, Message, MessageKind, Session,
    SettingsClient, SettingsStore,
};

use bk_core::{ColorTarget, FontFamily, UserSettings};

use std::time::Instant;

use log::{debug, warn};

/// Shown in place of a logo URL that cannot be displayed
pub const LOGO_PLACEHOLDER_URL: &str = "https://via.placeholder.com/150x50?text=Invalid+Logo+URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Loading,
    Ready,
    Saving,
}

#[derive(Debug)]
pub enum SaveOutcome {
    Saved,
    Failed(ClientError),
    /// Not ready or not signed in; nothing was sent
    Skipped,
}

pub struct SettingsForm<S> {
    client: SettingsClient<S>,
    session: Option<Session>,
    locale: Locale,
    phase: FormPhase,
    settings: UserSettings,
    active_tab: ColorTarget,
    message: Option<FormMessage>,
    load_error: Option<ClientError>,
}

impl<S: SettingsStore> SettingsForm<S> {
    pub fn new(client: SettingsClient<S>, session: Option<Session>) -> Self {
        Self {
            client,
            session,
            locale: Locale::default(),
            phase: FormPhase::Loading,
            settings: UserSettings::default(),
            active_tab: ColorTarget::default(),
            message: None,
            load_error: None,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn client(&self) -> &SettingsClient<S> {
        &self.client
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn active_tab(&self) -> ColorTarget {
        self.active_tab
    }

    /// Load the signed-in user's record, or keep the defaults.
    ///
    /// When the backend is unreachable the form still becomes ready with the
    /// defaults; the failure is kept in [`Self::load_error`] so callers that
    /// save without showing the form first can refuse to.
    pub async fn mount(&mut self) {
        self.phase = FormPhase::Loading;
        self.load_error = None;

        self.settings = match self.session {
            Some(ref session) => match self.client.load(session.user_id()).await {
                LoadOutcome::Unavailable(e) => {
                    warn!("Error loading user settings: {}", e);
                    self.load_error = Some(e);
                    UserSettings::default()
                }
                outcome => outcome.into_record(),
            },
            None => {
                debug!("No session, showing default settings");
                UserSettings::default()
            }
        };

        self.phase = FormPhase::Ready;
    }

    /// Error of the last `mount`, if the stored record could not be read
    pub fn load_error(&self) -> Option<&ClientError> {
        self.load_error.as_ref()
    }

    pub fn take_load_error(&mut self) -> Option<ClientError> {
        self.load_error.take()
    }

    pub fn set_logo_url(&mut self, url: impl Into<String>) {
        if !self.is_editable() {
            return;
        }
        let url = url.into();
        self.settings.logo_url = (!url.is_empty()).then_some(url);
    }

    pub fn set_font_family(&mut self, font: FontFamily) {
        self.set_font_family_name(font.as_str());
    }

    /// Font names outside the catalogue are kept as typed
    pub fn set_font_family_name(&mut self, name: &str) {
        if !self.is_editable() {
            return;
        }
        self.settings.font_family = name.to_string();
    }

    pub fn select_color_tab(&mut self, target: ColorTarget) {
        if !self.is_editable() {
            return;
        }
        self.active_tab = target;
    }

    /// Colour currently shown by the shared picker
    pub fn picker_color(&self) -> &str {
        self.settings.color(self.active_tab)
    }

    /// Picker changes land on the active tab's colour only
    pub fn set_picker_color(&mut self, color: impl Into<String>) {
        if !self.is_editable() {
            return;
        }
        self.settings.set_color(self.active_tab, color);
    }

    /// Per-tab text input
    pub fn set_color_text(&mut self, target: ColorTarget, value: impl Into<String>) {
        if !self.is_editable() {
            return;
        }
        self.settings.set_color(target, value);
    }

    pub async fn save(&mut self) -> SaveOutcome {
        if self.phase != FormPhase::Ready {
            return SaveOutcome::Skipped;
        }
        let Some(user_id) = self.session.as_ref().map(Session::user_id) else {
            return SaveOutcome::Skipped;
        };

        self.phase = FormPhase::Saving;
        let record = self.settings.with_owner(user_id);
        let result = self.client.save(&record).await;
        self.phase = FormPhase::Ready;

        match result {
            Ok(()) => {
                self.settings = record;
                self.show(MessageKind::Success, Message::SettingsSaved);
                SaveOutcome::Saved
            }
            Err(e) => {
                self.show(MessageKind::Error, Message::SaveFailed);
                SaveOutcome::Failed(e)
            }
        }
    }

    /// Active message as of `now`; `None` once it has expired
    pub fn message_at(&self, now: Instant) -> Option<&FormMessage> {
        self.message.as_ref().filter(|m| !m.is_expired_at(now))
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message_at(Instant::now())
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        if self.message.as_ref().is_some_and(|m| m.is_expired_at(now)) {
            self.message = None;
        }
    }

    /// The edit surface is disabled while loading or saving
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Loading | FormPhase::Saving)
    }

    /// Localized label of the save button
    pub fn save_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Saving => self.locale.text(Message::Saving),
            _ => self.locale.text(Message::Save),
        }
    }

    /// Image source for the logo preview
    pub fn logo_preview(&self) -> Option<&str> {
        match self.settings.logo_url() {
            "" => None,
            url if reqwest::Url::parse(url).is_ok() => Some(url),
            _ => Some(LOGO_PLACEHOLDER_URL),
        }
    }

    fn is_editable(&self) -> bool {
        !self.is_busy()
    }

    fn show(&mut self, kind: MessageKind, message: Message) {
        self.message = Some(FormMessage::new(
            kind,
            self.locale.text(message),
            Instant::now(),
        ));
    }
}
