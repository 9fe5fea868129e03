use crate::{AppConfig, AppMode};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_mode_when_base_url_then_matching_url_selected() {
    let mut app = AppConfig::default();
    assert_that!(app.base_url(), eq("http://localhost:3000"));

    app.mode = AppMode::Production;
    assert_that!(app.base_url(), eq("https://api.example.com"));
}

#[test]
fn given_production_over_http_when_validate_then_error() {
    let app = AppConfig {
        mode: AppMode::Production,
        prod_base_url: "http://api.example.com".into(),
        ..AppConfig::default()
    };
    assert_that!(app.validate(), err(anything()));
}

#[test]
fn given_development_over_http_when_validate_then_ok() {
    let app = AppConfig {
        prod_base_url: "http://staging.example.com".into(),
        ..AppConfig::default()
    };
    assert_that!(app.validate(), ok(anything()));
}

#[test]
fn given_url_without_host_when_validate_then_error() {
    let app = AppConfig {
        dev_base_url: "http://".into(),
        ..AppConfig::default()
    };
    assert_that!(app.validate(), err(anything()));
}

#[test]
fn given_mode_names_when_from_str_then_aliases_accepted() {
    assert_that!(AppMode::from_str("Production").unwrap(), eq(AppMode::Production));
    assert_that!(AppMode::from_str("dev").unwrap(), eq(AppMode::Development));
    assert_that!(AppMode::from_str("staging"), err(anything()));
}
