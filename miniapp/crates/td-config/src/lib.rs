mod app_config;
mod config;
mod error;
mod http_config;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use app_config::{AppConfig, AppMode};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use http_config::HttpConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "TD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".td";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_DEV_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_PROD_BASE_URL: &str = "https://api.example.com";

// HTTP constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const MIN_CONNECT_TIMEOUT_SECS: u64 = 1;
pub const MAX_CONNECT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_USER_AGENT: &str = concat!("td/", env!("CARGO_PKG_VERSION"));

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
