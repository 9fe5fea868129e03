use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid {kind} value: {value} {location}")]
    InvalidEnumValue {
        kind: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("Identity payload error: {message} {location}")]
    IdentityPayload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Locale catalog error: {message} {location}")]
    Catalog {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
