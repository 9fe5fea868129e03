use crate::HostEnvironment;

use td_core::Locale;

/// Pick the interface language: the host user's language when supported,
/// then the configured one, then English.
pub fn resolve_locale(host: &dyn HostEnvironment, configured: Option<Locale>) -> Locale {
    host.language_code()
        .and_then(|code| Locale::from_language_code(&code))
        .or(configured)
        .unwrap_or_default()
}
