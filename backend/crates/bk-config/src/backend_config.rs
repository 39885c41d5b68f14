use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOCALE, DEFAULT_SERVER_URL};

use std::str::FromStr;

use serde::Deserialize;

/// Where the settings client reads and writes records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Hosted backend-as-a-service table (REST + auth endpoints)
    #[default]
    Hosted,
    /// First-party settings service (`bk-server`)
    Server,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hosted => "hosted",
            Self::Server => "server",
        }
    }
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s {
            "hosted" => Ok(Self::Hosted),
            "server" => Ok(Self::Server),
            _ => Err(ConfigError::backend(format!(
                "backend.store must be 'hosted' or 'server', got '{}'",
                s
            ))),
        }
    }
}

/// Client-side endpoints and credentials
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the hosted backend (auth and data endpoints)
    pub url: String,
    /// Anonymous (publishable) API key of the hosted backend
    pub anon_key: Option<String>,
    pub store: StoreKind,
    /// Base URL of the settings service, used when `store = "server"`
    pub server_url: String,
    /// Language of user-facing messages ("ja" or "en")
    pub locale: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: None,
            store: StoreKind::default(),
            server_url: String::from(DEFAULT_SERVER_URL),
            locale: String::from(DEFAULT_LOCALE),
        }
    }
}

impl BackendConfig {
    /// Validate the values a client needs before talking to the backend.
    ///
    /// The auth endpoints always live on the hosted backend, so `url` and
    /// `anon_key` are required regardless of `store`.
    pub fn validate_for_client(&self) -> ConfigErrorResult<()> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::backend(
                "backend.url is required (set BK_BACKEND_URL)",
            ));
        }

        if !is_http_url(&self.url) {
            return Err(ConfigError::backend(format!(
                "backend.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        if self.anon_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            return Err(ConfigError::backend(
                "backend.anon_key is required (set BK_BACKEND_ANON_KEY)",
            ));
        }

        if self.store == StoreKind::Server && !is_http_url(&self.server_url) {
            return Err(ConfigError::backend(format!(
                "backend.server_url must start with http:// or https://, got '{}'",
                self.server_url
            )));
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
