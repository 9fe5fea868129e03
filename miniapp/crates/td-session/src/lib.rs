//! Session layer of the mini-app client.
//!
//! [`SessionOrchestrator`] turns whatever credentials are available (session
//! cookies, a refresh, or the host's identity payload) into an authenticated
//! [`td_core::User`] and publishes every step through a `watch` channel.
//! [`AccountActions`] wraps the mutating endpoints so that each successful
//! change is followed by a full re-fetch of the user.

mod abort_signal;
mod actions;
mod api;
mod error;
mod host;
mod locale;
mod orchestrator;
mod state;
mod theme;

#[cfg(test)]
mod tests;

pub use abort_signal::AbortSignal;
pub use actions::{AccountActions, ActionOutcome};
pub use api::SessionApi;
pub use error::{SessionError, SessionErrorResult};
pub use host::{HostEnvironment, IdentitySource, StaticHost};
pub use locale::resolve_locale;
pub use orchestrator::{DEV_PLACEHOLDER_USER_ID, SessionOrchestrator, placeholder_user};
pub use state::{SessionPhase, SessionSnapshot};
pub use theme::ThemeController;
