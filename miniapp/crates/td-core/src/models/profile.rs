use crate::{DrinkingStatus, Education, Gender, Occupation, SmokingStatus};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A member's public dating profile as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub gender: Gender,
    /// Raw date as sent by the server (`YYYY-MM-DD` or a full timestamp)
    pub birth_date: String,
    pub height: u16,
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub smoking: Option<SmokingStatus>,
    #[serde(default)]
    pub drinking: Option<DrinkingStatus>,
    #[serde(default)]
    pub education: Option<Education>,
    #[serde(default)]
    pub occupation: Option<Occupation>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Calendar birth date, if the server value starts with `YYYY-MM-DD`
    pub fn birth_date(&self) -> Option<NaiveDate> {
        let prefix = self.birth_date.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }

    /// Age in whole years on the given day
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.birth_date().and_then(|born| today.years_since(born))
    }
}
