use std::panic::Location;

use error_location::ErrorLocation;
use td_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Not signed in: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session cycle aborted {location}")]
    Aborted { location: ErrorLocation },

    #[error("API error: {source}")]
    Client {
        #[from]
        source: ClientError,
    },
}

impl SessionError {
    #[track_caller]
    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        SessionError::Unauthenticated {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn aborted() -> Self {
        SessionError::Aborted {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type SessionErrorResult<T> = std::result::Result<T, SessionError>;
