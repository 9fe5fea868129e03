use crate::{
    AppConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, HttpConfig, LoggingConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub http: HttpConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TD_CONFIG_DIR env var, else use ./.td/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(&Self::config_dir()?)
    }

    /// Load from an explicit directory (the `--config-dir` flag), then apply env overrides
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_dir = config_dir.to_path_buf();

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TD_CONFIG_DIR env var > ./.td/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.app.validate()?;
        self.http.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// API root for the configured mode
    pub fn base_url(&self) -> &str {
        self.app.base_url()
    }

    /// Point the active mode at a different API root
    pub fn override_base_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if self.app.mode.is_development() {
            self.app.dev_base_url = url;
        } else {
            self.app.prod_base_url = url;
        }
    }

    /// Whether the placeholder user may stand in for an unreachable API
    pub fn dev_fallback_enabled(&self) -> bool {
        self.app.mode.is_development() && self.session.dev_fallback_user
    }

    /// Log configuration summary (never logs the identity payload).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  app: {} -> {}", self.app.mode, self.base_url());
        info!(
            "  app: dev_init_data {}, locale {}",
            if self.app.dev_init_data.is_some() {
                "set"
            } else {
                "unset"
            },
            self.app
                .locale
                .map(|locale| locale.as_str())
                .unwrap_or("auto")
        );
        info!(
            "  http: timeout={}s, connect={}s, agent={}",
            self.http.timeout_secs, self.http.connect_timeout_secs, self.http.user_agent
        );
        info!(
            "  session: dev_fallback_user={}",
            self.dev_fallback_enabled()
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // App
        Self::apply_env_parse("TD_APP_MODE", &mut self.app.mode);
        Self::apply_env_string("TD_DEV_BASE_URL", &mut self.app.dev_base_url);
        Self::apply_env_string("TD_PROD_BASE_URL", &mut self.app.prod_base_url);
        Self::apply_env_option_string("TD_DEV_INIT_DATA", &mut self.app.dev_init_data);
        Self::apply_env_option_parse("TD_LOCALE", &mut self.app.locale);

        // HTTP
        Self::apply_env_parse("TD_HTTP_TIMEOUT_SECS", &mut self.http.timeout_secs);
        Self::apply_env_parse(
            "TD_HTTP_CONNECT_TIMEOUT_SECS",
            &mut self.http.connect_timeout_secs,
        );
        Self::apply_env_string("TD_HTTP_USER_AGENT", &mut self.http.user_agent);

        // Session
        Self::apply_env_bool(
            "TD_SESSION_DEV_FALLBACK_USER",
            &mut self.session.dev_fallback_user,
        );

        // Logging
        Self::apply_env_parse("TD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TD_LOG_FILE", &mut self.logging.file);
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

    /// Helper: Apply environment variable override for optional parseable values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
