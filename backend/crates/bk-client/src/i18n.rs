//! User-facing strings.

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Unsupported locale '{value}' {location}")]
    Unsupported {
        value: String,
        location: ErrorLocation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

/// Keys of the message catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SettingsSaved,
    SaveFailed,
    AuthFailed,
    Loading,
    Save,
    Saving,
    Processing,
    ConfirmationSent,
    SignIn,
    SignUp,
    SignOut,
    SwitchToSignIn,
    SwitchToSignUp,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// Unknown names fall back to Japanese
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    pub fn text(&self, message: Message) -> &'static str {
        match self {
            Self::Ja => ja(message),
            Self::En => en(message),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "ja-jp" => Ok(Self::Ja),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            other => Err(LocaleError::Unsupported {
                value: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn ja(message: Message) -> &'static str {
    match message {
        Message::SettingsSaved => "設定が保存されました",
        Message::SaveFailed => "設定の保存に失敗しました",
        Message::AuthFailed => "認証エラーが発生しました",
        Message::Loading => "読み込み中...",
        Message::Save => "保存",
        Message::Saving => "保存中...",
        Message::Processing => "処理中...",
        Message::ConfirmationSent => "確認メールを送信しました。メールを確認してください",
        Message::SignIn => "ログイン",
        Message::SignUp => "アカウント作成",
        Message::SignOut => "ログアウト",
        Message::SwitchToSignIn => "すでにアカウントをお持ちの方はこちら",
        Message::SwitchToSignUp => "アカウントをお持ちでない方はこちら",
    }
}

fn en(message: Message) -> &'static str {
    match message {
        Message::SettingsSaved => "Settings saved",
        Message::SaveFailed => "Failed to save settings",
        Message::AuthFailed => "An authentication error occurred",
        Message::Loading => "Loading...",
        Message::Save => "Save",
        Message::Saving => "Saving...",
        Message::Processing => "Processing...",
        Message::ConfirmationSent => "Check your email to confirm your account",
        Message::SignIn => "Sign in",
        Message::SignUp => "Create account",
        Message::SignOut => "Sign out",
        Message::SwitchToSignIn => "Already have an account? Sign in",
        Message::SwitchToSignUp => "No account yet? Create one",
    }
}
