use serde::Serialize;
use td_core::User;

/// Where the session ladder currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Nothing has run yet
    #[default]
    Bootstrapping,
    Probing,
    Refreshing,
    Exchanging,
    Authenticated,
    Unauthenticated,
}

impl SessionPhase {
    /// Terminal phases end a cycle
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Authenticated | Self::Unauthenticated)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bootstrapping => "bootstrapping",
            Self::Probing => "probing",
            Self::Refreshing => "refreshing",
            Self::Exchanging => "exchanging",
            Self::Authenticated => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the UI renders from: the caller's user, if known, and progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub user: Option<User>,
    pub loading: bool,
    /// Description of the last failure seen by the latest cycle
    pub error: Option<String>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated && self.user.is_some()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Bootstrapping,
            user: None,
            loading: true,
            error: None,
        }
    }
}
