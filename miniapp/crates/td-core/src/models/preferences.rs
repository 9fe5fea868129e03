use crate::{DatingGoal, DrinkingPreference, GenderPreference, PreferredLocation, SmokingPreference};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Who a member wants to be shown in discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub id: String,
    pub user_id: String,
    pub gender_preference: GenderPreference,
    pub min_age: u8,
    pub max_age: u8,
    pub location_preference: PreferredLocation,
    #[serde(default)]
    pub max_distance: u16,
    /// Older server revisions send a single goal instead of a list
    #[serde(default, deserialize_with = "one_or_many")]
    pub dating_goal_preference: Vec<DatingGoal>,
    #[serde(default)]
    pub smoking_preference: Option<SmokingPreference>,
    #[serde(default)]
    pub drinking_preference: Option<DrinkingPreference>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Preferences {
    pub fn accepts_age(&self, age: u32) -> bool {
        (u32::from(self.min_age)..=u32::from(self.max_age)).contains(&age)
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<DatingGoal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(DatingGoal),
        Many(Vec<DatingGoal>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(goal)) => vec![goal],
        Some(OneOrMany::Many(goals)) => goals,
        None => Vec::new(),
    })
}
