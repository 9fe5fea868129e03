use error_location::ErrorLocation;
use std::panic::Location;
use td_core::UploadRejection;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server could not be reached (connect failure or timeout)
    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Missing or expired session credentials
    #[error("Unauthorized {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("HTTP {status}: {message} {location}")]
    Status {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("API error: {message} (code: {code}) {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// The server answered `success: false`
    #[error("Request rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot upload {file_name}: {rejection} {location}")]
    InvalidUpload {
        file_name: String,
        rejection: UploadRejection,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context; connect failures and timeouts become `Network`
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            return ClientError::Network {
                message: err.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn network<S: Into<String>>(message: S) -> Self {
        ClientError::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized() -> Self {
        ClientError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn status<S: Into<String>>(status: u16, message: S) -> Self {
        ClientError::Status {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(code: String, message: String) -> Self {
        ClientError::Api {
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        ClientError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_upload(file_name: &str, rejection: UploadRejection) -> Self {
        ClientError::InvalidUpload {
            file_name: file_name.to_string(),
            rejection,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The credentials were refused; a refresh or a new exchange may help
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    /// The request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Network { .. } | ClientError::Http { .. })
    }

    /// A response arrived but its body was not the JSON we expect
    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Json { .. })
    }

    /// Message suitable for showing to the member
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network { message, .. }
            | ClientError::Http { message, .. }
            | ClientError::Status { message, .. }
            | ClientError::Api { message, .. }
            | ClientError::Rejected { message, .. }
            | ClientError::Json { message, .. } => message.clone(),
            ClientError::Unauthorized { .. } => String::from("Unauthorized"),
            ClientError::InvalidUpload { rejection, .. } => rejection.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
