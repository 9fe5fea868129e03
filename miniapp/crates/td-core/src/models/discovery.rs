//! Read models for the discovery deck and the matches list.

use crate::models::string_or_number;

use serde::{Deserialize, Serialize};

/// One candidate returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryCard {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, alias = "img")]
    pub photo: Option<String>,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// A mutual like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCard {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "image")]
    pub photo: Option<String>,
    #[serde(default)]
    pub is_new: bool,
}

/// Number of matches not yet seen
pub fn count_new(matches: &[MatchCard]) -> usize {
    matches.iter().filter(|m| m.is_new).count()
}
