pub mod background;
pub mod catalog;
pub mod dating_goal;
pub mod discovery;
pub mod drafts;
pub mod gender;
pub mod lifestyle;
pub mod photo;
pub mod preferences;
pub mod profile;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Accepts ids sent either as JSON strings or numbers
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
