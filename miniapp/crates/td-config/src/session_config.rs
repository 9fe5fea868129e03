use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Development only: when the API cannot be reached, continue with a
    /// placeholder user instead of ending unauthenticated
    pub dev_fallback_user: bool,
}
