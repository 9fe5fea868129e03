use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What a member wants out of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatingGoal {
    Relationship,
    Friendship,
    Casual,
    Marriage,
    Networking,
}

impl DatingGoal {
    pub const ALL: [DatingGoal; 5] = [
        Self::Relationship,
        Self::Friendship,
        Self::Casual,
        Self::Marriage,
        Self::Networking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relationship => "RELATIONSHIP",
            Self::Friendship => "FRIENDSHIP",
            Self::Casual => "CASUAL",
            Self::Marriage => "MARRIAGE",
            Self::Networking => "NETWORKING",
        }
    }

    /// Translation key for the option label
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Relationship => "datingGoal.relationship",
            Self::Friendship => "datingGoal.friendship",
            Self::Casual => "datingGoal.casual",
            Self::Marriage => "datingGoal.marriage",
            Self::Networking => "datingGoal.networking",
        }
    }
}

impl FromStr for DatingGoal {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "RELATIONSHIP" => Ok(Self::Relationship),
            "FRIENDSHIP" => Ok(Self::Friendship),
            "CASUAL" => Ok(Self::Casual),
            "MARRIAGE" => Ok(Self::Marriage),
            "NETWORKING" => Ok(Self::Networking),
            _ => Err(CoreError::InvalidEnumValue {
                kind: "dating goal",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for DatingGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How far away a match may live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferredLocation {
    SameCity,
    SameCountry,
    Nearby,
    Anywhere,
}

impl PreferredLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SameCity => "SAME_CITY",
            Self::SameCountry => "SAME_COUNTRY",
            Self::Nearby => "NEARBY",
            Self::Anywhere => "ANYWHERE",
        }
    }
}

impl FromStr for PreferredLocation {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "SAME_CITY" => Ok(Self::SameCity),
            "SAME_COUNTRY" => Ok(Self::SameCountry),
            "NEARBY" => Ok(Self::Nearby),
            "ANYWHERE" => Ok(Self::Anywhere),
            _ => Err(CoreError::InvalidEnumValue {
                kind: "preferred location",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PreferredLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
