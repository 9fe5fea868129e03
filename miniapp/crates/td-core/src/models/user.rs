//! User aggregate - the single record the server returns from `whoami`.

use crate::{Photo, Preferences, Profile};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The caller's account together with its optional profile, preferences and photos.
///
/// The client never patches this record; it is replaced wholesale by a
/// re-fetch after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub telegram_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    /// Server-side flag: the profile wizard has not been completed yet
    #[serde(default)]
    pub is_new: bool,
    /// Server-side flag: preferences have been saved
    #[serde(default)]
    pub is_preferences: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl User {
    /// Name to show in headers: "First Last", falling back to the username, then the id.
    pub fn display_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.as_deref().map(str::trim).unwrap_or_default();

        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{first} {last}"),
            (false, true) => first.to_string(),
            (true, false) => last.to_string(),
            (true, true) => self
                .username
                .as_deref()
                .filter(|name| !name.is_empty())
                .map(|name| format!("@{name}"))
                .unwrap_or_else(|| self.id.clone()),
        }
    }

    /// The photo flagged as main, or the first one when none is flagged
    pub fn main_photo(&self) -> Option<&Photo> {
        self.photos
            .iter()
            .find(|photo| photo.is_main)
            .or_else(|| self.photos.first())
    }

    /// Whether the profile wizard still has to be shown
    pub fn needs_profile(&self) -> bool {
        self.profile.is_none() || self.is_new
    }

    /// Whether the preferences form still has to be shown
    pub fn needs_preferences(&self) -> bool {
        !self.needs_profile() && (self.preferences.is_none() || !self.is_preferences)
    }

    /// Whether photos still have to be uploaded
    pub fn needs_photos(&self) -> bool {
        self.photos.is_empty()
    }
}
