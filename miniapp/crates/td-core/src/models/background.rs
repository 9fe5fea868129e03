use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Education {
    HighSchool,
    College,
    Bachelor,
    Master,
    Phd,
    SelfTaught,
    Other,
}

impl Education {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighSchool => "HIGH_SCHOOL",
            Self::College => "COLLEGE",
            Self::Bachelor => "BACHELOR",
            Self::Master => "MASTER",
            Self::Phd => "PHD",
            Self::SelfTaught => "SELF_TAUGHT",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for Education {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "HIGH_SCHOOL" => Ok(Self::HighSchool),
            "COLLEGE" => Ok(Self::College),
            "BACHELOR" => Ok(Self::Bachelor),
            "MASTER" => Ok(Self::Master),
            "PHD" => Ok(Self::Phd),
            "SELF_TAUGHT" => Ok(Self::SelfTaught),
            "OTHER" => Ok(Self::Other),
            _ => Err(CoreError::InvalidEnumValue {
                kind: "education",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Education {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Occupation {
    Student,
    Employee,
    Freelancer,
    Entrepreneur,
    Unemployed,
    Retired,
    Other,
}

impl Occupation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Employee => "EMPLOYEE",
            Self::Freelancer => "FREELANCER",
            Self::Entrepreneur => "ENTREPRENEUR",
            Self::Unemployed => "UNEMPLOYED",
            Self::Retired => "RETIRED",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for Occupation {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "STUDENT" => Ok(Self::Student),
            "EMPLOYEE" => Ok(Self::Employee),
            "FREELANCER" => Ok(Self::Freelancer),
            "ENTREPRENEUR" => Ok(Self::Entrepreneur),
            "UNEMPLOYED" => Ok(Self::Unemployed),
            "RETIRED" => Ok(Self::Retired),
            "OTHER" => Ok(Self::Other),
            _ => Err(CoreError::InvalidEnumValue {
                kind: "occupation",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Occupation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
