use super::payload_with_language;
use crate::{HostEnvironment, IdentitySource, StaticHost};

use googletest::prelude::*;
use td_config::AppMode;
use td_core::{ColorScheme, IdentityPayload};

#[test]
fn given_development_with_dev_payload_when_resolving_then_dev_payload_wins() {
    let host = StaticHost::new(IdentityPayload::new("host=1"), None);

    let source = IdentitySource::resolve(AppMode::Development, Some("dev=1"), &host);

    assert!(matches!(source, IdentitySource::Development(_)));
    assert_that!(source.payload().map(|p| p.as_str()), some(eq("dev=1")));
}

#[test]
fn given_development_without_dev_payload_when_resolving_then_host_payload_used() {
    let host = StaticHost::new(IdentityPayload::new("host=1"), None);

    let source = IdentitySource::resolve(AppMode::Development, Some("   "), &host);

    assert!(matches!(source, IdentitySource::Host(_)));
}

#[test]
fn given_production_when_resolving_then_dev_payload_ignored() {
    let host = StaticHost::new(IdentityPayload::new("host=1"), None);

    let source = IdentitySource::resolve(AppMode::Production, Some("dev=1"), &host);

    assert_that!(source.payload().map(|p| p.as_str()), some(eq("host=1")));
}

#[test]
fn given_production_without_host_payload_when_resolving_then_none() {
    let source = IdentitySource::resolve(AppMode::Production, Some("dev=1"), &StaticHost::detached());

    assert_that!(source, eq(&IdentitySource::None));
    assert_that!(source.into_payload(), none());
}

#[test]
fn given_payload_with_user_when_reading_language_then_hint_returned() {
    let host = StaticHost::new(Some(payload_with_language("ru")), None);

    assert_that!(host.language_code(), some(eq("ru")));
    assert_that!(host.hinted_user().map(|u| u.first_name), some(eq("Anna")));
}

#[test]
fn given_unreadable_user_blob_when_reading_hint_then_none() {
    let host = StaticHost::new(IdentityPayload::new("user=not-json&hash=abc"), None);

    assert_that!(host.hinted_user(), none());
}

#[test]
fn given_subscriber_when_scheme_changes_then_change_observed() {
    let host = StaticHost::new(None, Some(ColorScheme::Light));
    let mut theme_rx = host.subscribe_theme();

    host.set_color_scheme(Some(ColorScheme::Dark));

    assert_that!(theme_rx.has_changed().unwrap(), eq(true));
    assert_that!(*theme_rx.borrow_and_update(), some(eq(ColorScheme::Dark)));
    assert_that!(host.color_scheme(), some(eq(ColorScheme::Dark)));
}
