use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_JWT_AUDIENCE,
    MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

/// Bearer-token checks on the settings service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 secret shared with the auth backend
    pub jwt_secret: Option<String>,
    /// Expected `aud` claim; unchecked when absent
    pub jwt_audience: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_audience: Some(String::from(DEFAULT_JWT_AUDIENCE)),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        match self.jwt_secret {
            None => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret to be set",
            )),
            Some(ref secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )))
            }
            Some(_) => Ok(()),
        }
    }
}
