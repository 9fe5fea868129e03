use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use td_client::ClientError;
use td_config::ConfigError;
use td_session::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("Cannot read {path}: {message} {location}")]
    Input {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Output error: {source}")]
    Output {
        #[from]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn input<S: Into<String>>(path: impl Into<PathBuf>, message: S) -> Self {
        CliError::Input {
            path: path.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
