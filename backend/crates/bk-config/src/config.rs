use crate::{
    AuthConfig, BackendConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub backend: BackendConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for BK_CONFIG_DIR env var, else use ./.brandkit/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply BK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // Development convenience; a missing .env is not an error
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BK_CONFIG_DIR env var > ./.brandkit/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate server-side configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;

        // Database path must stay inside the config dir
        let db_path = Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: {}{}",
            if self.auth.enabled {
                "enabled (HS256)"
            } else {
                "disabled"
            },
            self.auth
                .jwt_audience
                .as_deref()
                .map(|aud| format!(", audience={}", aud))
                .unwrap_or_default()
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  backend: url={}, anon_key={}, store={}",
            if self.backend.url.is_empty() {
                "<unset>"
            } else {
                &self.backend.url
            },
            if self.backend.anon_key.is_some() {
                "<set>"
            } else {
                "<unset>"
            },
            self.backend.store.as_str()
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BK_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BK_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("BK_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("BK_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("BK_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string("BK_AUTH_JWT_AUDIENCE", &mut self.auth.jwt_audience);

        // Logging
        Self::apply_env_parse("BK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BK_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BK_LOG_FILE", &mut self.logging.file);

        // Backend
        Self::apply_env_string("BK_BACKEND_URL", &mut self.backend.url);
        Self::apply_env_option_string("BK_BACKEND_ANON_KEY", &mut self.backend.anon_key);
        Self::apply_env_parse("BK_BACKEND_STORE", &mut self.backend.store);
        Self::apply_env_string("BK_SERVER_URL", &mut self.backend.server_url);
        Self::apply_env_string("BK_LOCALE", &mut self.backend.locale);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
