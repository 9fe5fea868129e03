use crate::{ConfigError, ConfigErrorResult, DEFAULT_DEV_BASE_URL, DEFAULT_PROD_BASE_URL};

use std::str::FromStr;

use serde::Deserialize;
use td_core::Locale;

/// Which API deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    #[default]
    Development,
    Production,
}

impl AppMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Self::Development
    }
}

impl FromStr for AppMode {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::app(format!(
                "app.mode must be development or production, got {other}"
            ))),
        }
    }
}

impl std::fmt::Display for AppMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: AppMode,
    pub dev_base_url: String,
    pub prod_base_url: String,
    /// Fixed identity payload used when no host supplies one (development only)
    pub dev_init_data: Option<String>,
    /// Preferred interface language when the host user has none
    pub locale: Option<Locale>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: AppMode::default(),
            dev_base_url: String::from(DEFAULT_DEV_BASE_URL),
            prod_base_url: String::from(DEFAULT_PROD_BASE_URL),
            dev_init_data: None,
            locale: None,
        }
    }
}

impl AppConfig {
    /// API root for the current mode
    pub fn base_url(&self) -> &str {
        match self.mode {
            AppMode::Development => &self.dev_base_url,
            AppMode::Production => &self.prod_base_url,
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_url("app.dev_base_url", &self.dev_base_url)?;
        Self::check_url("app.prod_base_url", &self.prod_base_url)?;

        if self.mode == AppMode::Production && !self.prod_base_url.starts_with("https://") {
            return Err(ConfigError::app(format!(
                "app.prod_base_url must use https in production, got {}",
                self.prod_base_url
            )));
        }

        Ok(())
    }

    fn check_url(name: &str, value: &str) -> ConfigErrorResult<()> {
        let Some(rest) = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"))
        else {
            return Err(ConfigError::app(format!(
                "{name} must start with http:// or https://, got {value}"
            )));
        };

        if rest.trim_end_matches('/').is_empty() {
            return Err(ConfigError::app(format!("{name} has no host: {value}")));
        }

        Ok(())
    }
}
