//! The seam between the client and whatever embeds it.
//!
//! In production the embedding host (the Telegram WebApp) supplies the signed
//! identity payload and the current color scheme. Development and tests use
//! [`StaticHost`].

use td_config::AppMode;
use td_core::{ColorScheme, HostUser, IdentityPayload};

use tokio::sync::watch;

pub trait HostEnvironment: Send + Sync {
    /// Signed identity payload, if the host provides one
    fn identity_payload(&self) -> Option<IdentityPayload>;

    /// Color scheme the host currently reports
    fn color_scheme(&self) -> Option<ColorScheme>;

    /// Receiver that observes every host `themeChanged` notification
    fn subscribe_theme(&self) -> watch::Receiver<Option<ColorScheme>>;

    /// User hint embedded in the identity payload (display and locale only)
    fn hinted_user(&self) -> Option<HostUser> {
        let payload = self.identity_payload()?;
        match payload.hinted_user() {
            Ok(user) => user,
            Err(e) => {
                log::debug!("Ignoring unreadable identity hint: {e}");
                None
            }
        }
    }

    fn language_code(&self) -> Option<String> {
        self.hinted_user().and_then(|user| user.language_code)
    }
}

/// Host double with a fixed payload and a settable color scheme
pub struct StaticHost {
    payload: Option<IdentityPayload>,
    scheme_tx: watch::Sender<Option<ColorScheme>>,
}

impl StaticHost {
    pub fn new(payload: Option<IdentityPayload>, color_scheme: Option<ColorScheme>) -> Self {
        let (scheme_tx, _) = watch::channel(color_scheme);
        Self { payload, scheme_tx }
    }

    /// No payload and no color scheme, as when running outside any host
    pub fn detached() -> Self {
        Self::new(None, None)
    }

    /// Simulate a host `themeChanged` event
    pub fn set_color_scheme(&self, color_scheme: Option<ColorScheme>) {
        log::debug!("Host color scheme changed to {color_scheme:?}");
        self.scheme_tx.send_replace(color_scheme);
    }
}

impl HostEnvironment for StaticHost {
    fn identity_payload(&self) -> Option<IdentityPayload> {
        self.payload.clone()
    }

    fn color_scheme(&self) -> Option<ColorScheme> {
        *self.scheme_tx.borrow()
    }

    fn subscribe_theme(&self) -> watch::Receiver<Option<ColorScheme>> {
        self.scheme_tx.subscribe()
    }
}

/// Where the identity payload for a session comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentitySource {
    /// Fixed payload from configuration (development only)
    Development(IdentityPayload),
    /// Payload handed over by the host
    Host(IdentityPayload),
    None,
}

impl IdentitySource {
    /// Development prefers the configured payload and falls back to the host;
    /// production only ever trusts the host.
    pub fn resolve(
        mode: AppMode,
        dev_init_data: Option<&str>,
        host: &dyn HostEnvironment,
    ) -> Self {
        if mode.is_development()
            && let Some(payload) = dev_init_data.and_then(IdentityPayload::new)
        {
            return Self::Development(payload);
        }

        match host.identity_payload() {
            Some(payload) => Self::Host(payload),
            None => Self::None,
        }
    }

    pub fn payload(&self) -> Option<&IdentityPayload> {
        match self {
            Self::Development(payload) | Self::Host(payload) => Some(payload),
            Self::None => None,
        }
    }

    pub fn into_payload(self) -> Option<IdentityPayload> {
        match self {
            Self::Development(payload) | Self::Host(payload) => Some(payload),
            Self::None => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Development(_) => "development payload",
            Self::Host(_) => "host payload",
            Self::None => "none",
        }
    }
}
