use crate::HttpConfig;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_defaults_when_validate_then_ok() {
    let http = HttpConfig::default();
    assert_that!(http.validate(), ok(anything()));
    assert_that!(http.timeout(), eq(Duration::from_secs(15)));
}

#[test]
fn given_timeout_bounds_when_validate_then_inclusive() {
    for (timeout_secs, valid) in [(0, false), (5, true), (120, true), (121, false)] {
        let http = HttpConfig {
            timeout_secs,
            ..HttpConfig::default()
        };
        assert_that!(http.validate().is_ok(), eq(valid));
    }
}

#[test]
fn given_connect_timeout_longer_than_timeout_when_validate_then_error() {
    let http = HttpConfig {
        timeout_secs: 10,
        connect_timeout_secs: 20,
        ..HttpConfig::default()
    };
    assert_that!(http.validate(), err(anything()));
}

#[test]
fn given_blank_user_agent_when_validate_then_error() {
    let http = HttpConfig {
        user_agent: " ".into(),
        ..HttpConfig::default()
    };
    assert_that!(http.validate(), err(anything()));
}
