//! Client-side form validation.
//!
//! Validators never fail; they return a [`ValidationReport`] mapping each
//! offending field to the translation key of its message. An empty report
//! means the form may be submitted.

mod photo;
mod preferences;
mod profile;
mod profile_form;

pub use photo::{MAX_PHOTO_BYTES, UploadRejection, check_upload};
pub use preferences::PreferencesValidator;
pub use profile::{ProfileStep, ProfileValidator};
pub use profile_form::{FormProgress, ProfileForm};

use crate::i18n::Catalog;

use std::collections::BTreeMap;

use serde::Serialize;

// Profile bounds
pub const MIN_MEMBER_AGE: u32 = 18;
pub const MIN_HEIGHT_CM: u16 = 120;
pub const MAX_HEIGHT_CM: u16 = 210;
pub const MIN_BIO_CHARS: usize = 10;
pub const MAX_BIO_CHARS: usize = 500;

// Preferences bounds
pub const MIN_PREFERRED_AGE: u8 = 18;
pub const MAX_PREFERRED_AGE: u8 = 100;
pub const MIN_DISTANCE_KM: u16 = 1;
pub const MAX_DISTANCE_KM: u16 = 100;

/// Fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    UserId,
    FirstName,
    LastName,
    BirthDate,
    Gender,
    Height,
    Country,
    City,
    DesiredLocationCountry,
    DesiredLocationCity,
    SeekingGender,
    DatingGoal,
    Interests,
    Languages,
    Bio,
    GenderPreference,
    MinAge,
    MaxAge,
    LocationPreference,
    MaxDistance,
    DatingGoalPreference,
    Photos,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserId => "userId",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::BirthDate => "birthDate",
            Self::Gender => "gender",
            Self::Height => "height",
            Self::Country => "country",
            Self::City => "city",
            Self::DesiredLocationCountry => "desiredLocationCountry",
            Self::DesiredLocationCity => "desiredLocationCity",
            Self::SeekingGender => "seekingGender",
            Self::DatingGoal => "datingGoal",
            Self::Interests => "interests",
            Self::Languages => "languages",
            Self::Bio => "bio",
            Self::GenderPreference => "genderPreference",
            Self::MinAge => "minAge",
            Self::MaxAge => "maxAge",
            Self::LocationPreference => "locationPreference",
            Self::MaxDistance => "maxDistance",
            Self::DatingGoalPreference => "datingGoalPreference",
            Self::Photos => "photos",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field → message key produced by a validator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<FormField, &'static str>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a message; a later check on the same field replaces an earlier one
    pub fn insert(&mut self, field: FormField, message_key: &'static str) {
        self.errors.insert(field, message_key);
    }

    pub fn clear(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.keys().copied()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }

    /// Messages rendered in the catalog's language, keyed by field name
    pub fn localized(&self, catalog: &Catalog<'_>) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(field, key)| (field.as_str(), catalog.text(key).to_string()))
            .collect()
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
