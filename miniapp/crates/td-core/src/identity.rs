//! Telegram identity payload (`initData`).
//!
//! The payload is a bearer credential: it is relayed verbatim to the server,
//! which verifies the signature. The client only peeks at the embedded `user`
//! blob for display and locale hints, never for trust decisions.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Opaque signed identity string supplied by the host environment
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityPayload(String);

impl IdentityPayload {
    /// Wrap a host-supplied payload. Blank input is treated as "no payload".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The payload exactly as the host produced it
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the embedded `user` JSON. Hints only; the signature is not checked.
    #[track_caller]
    pub fn hinted_user(&self) -> CoreResult<Option<HostUser>> {
        let Some(raw_user) = url::form_urlencoded::parse(self.0.as_bytes())
            .find(|(key, _)| key == "user")
            .map(|(_, value)| value.into_owned())
        else {
            return Ok(None);
        };

        serde_json::from_str(&raw_user)
            .map(Some)
            .map_err(|e| CoreError::IdentityPayload {
                message: format!("embedded user is not valid JSON: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Debug for IdentityPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IdentityPayload(<{} bytes redacted>)", self.0.len())
    }
}

/// User description embedded in the identity payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub photo_url: Option<String>,
}
