//! Smoking and drinking habits, and how a member feels about them in others.
//!
//! Both habits share one vocabulary on the wire, so each is a single enum with
//! habit-specific aliases.

use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HabitFrequency {
    Never,
    Occasionally,
    Regularly,
    Quit,
    PreferNotToSay,
}

pub type SmokingStatus = HabitFrequency;
pub type DrinkingStatus = HabitFrequency;

impl HabitFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "NEVER",
            Self::Occasionally => "OCCASIONALLY",
            Self::Regularly => "REGULARLY",
            Self::Quit => "QUIT",
            Self::PreferNotToSay => "PREFER_NOT_TO_SAY",
        }
    }
}

impl FromStr for HabitFrequency {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "NEVER" => Ok(Self::Never),
            "OCCASIONALLY" => Ok(Self::Occasionally),
            "REGULARLY" => Ok(Self::Regularly),
            "QUIT" => Ok(Self::Quit),
            "PREFER_NOT_TO_SAY" => Ok(Self::PreferNotToSay),
            _ => Err(CoreError::InvalidEnumValue {
                kind: "habit frequency",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for HabitFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HabitTolerance {
    Acceptable,
    Unacceptable,
    Neutral,
}

pub type SmokingPreference = HabitTolerance;
pub type DrinkingPreference = HabitTolerance;

impl HabitTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acceptable => "ACCEPTABLE",
            Self::Unacceptable => "UNACCEPTABLE",
            Self::Neutral => "NEUTRAL",
        }
    }

    /// Whether someone with the given habit is compatible with this tolerance.
    /// Unknown habits are never ruled out.
    pub fn accepts(&self, habit: Option<HabitFrequency>) -> bool {
        match (self, habit) {
            (Self::Unacceptable, Some(HabitFrequency::Occasionally | HabitFrequency::Regularly)) => {
                false
            }
            _ => true,
        }
    }
}

impl FromStr for HabitTolerance {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "ACCEPTABLE" => Ok(Self::Acceptable),
            "UNACCEPTABLE" => Ok(Self::Unacceptable),
            "NEUTRAL" => Ok(Self::Neutral),
            _ => Err(CoreError::InvalidEnumValue {
                kind: "habit tolerance",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for HabitTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
