use std::time::{Duration, Instant};

/// How long a status message stays visible
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient status line of the settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
    pub shown_at: Instant,
}

impl FormMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= MESSAGE_TTL
    }
}
