//! Form state that is submitted to the mutation endpoints.
//!
//! Drafts mirror what a member is typing, so every field may still be empty;
//! the validators decide whether a draft can be sent.

use crate::{
    DatingGoal, DrinkingPreference, DrinkingStatus, Education, Gender, GenderPreference,
    Occupation, PreferredLocation, SmokingPreference, SmokingStatus,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HEIGHT_CM: u16 = 170;
pub const DEFAULT_MIN_AGE: u8 = 18;
pub const DEFAULT_MAX_AGE: u8 = 35;
pub const DEFAULT_MAX_DISTANCE_KM: u16 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where the member would like their matches to live
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesiredLocation {
    pub country: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub user_id: String,

    // Step 1
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub height: u16,

    // Step 2
    pub country: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
    pub desired_location: DesiredLocation,

    // Step 3
    pub seeking_gender: Option<GenderPreference>,
    pub dating_goal: Option<DatingGoal>,
    pub interests: Vec<String>,
    pub languages: Vec<String>,

    // Step 4
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<SmokingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drinking: Option<DrinkingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<Occupation>,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            birth_date: None,
            gender: None,
            height: DEFAULT_HEIGHT_CM,
            country: String::new(),
            city: String::new(),
            location: None,
            desired_location: DesiredLocation::default(),
            seeking_gender: None,
            dating_goal: None,
            interests: Vec::new(),
            languages: Vec::new(),
            bio: String::new(),
            smoking: None,
            drinking: None,
            education: None,
            occupation: None,
        }
    }
}

impl ProfileDraft {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }
}

/// Partial profile edit; only present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<SmokingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drinking: Option<DrinkingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<Occupation>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesDraft {
    pub user_id: String,
    pub gender_preference: Option<GenderPreference>,
    pub min_age: Option<u8>,
    pub max_age: Option<u8>,
    pub location_preference: Option<PreferredLocation>,
    pub max_distance: u16,
    pub dating_goal_preference: Vec<DatingGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking_preference: Option<SmokingPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drinking_preference: Option<DrinkingPreference>,
}

impl Default for PreferencesDraft {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            gender_preference: None,
            min_age: Some(DEFAULT_MIN_AGE),
            max_age: Some(DEFAULT_MAX_AGE),
            location_preference: None,
            max_distance: DEFAULT_MAX_DISTANCE_KM,
            dating_goal_preference: Vec::new(),
            smoking_preference: None,
            drinking_preference: None,
        }
    }
}

impl PreferencesDraft {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Toggle a goal in the multi-select list
    pub fn toggle_goal(&mut self, goal: DatingGoal) {
        if let Some(index) = self.dating_goal_preference.iter().position(|g| *g == goal) {
            self.dating_goal_preference.remove(index);
        } else {
            self.dating_goal_preference.push(goal);
        }
    }
}
