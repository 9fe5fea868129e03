use crate::{LogLevel, LoggingConfig};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use log::LevelFilter;

#[test]
fn given_level_names_when_parse_then_unknown_falls_back_to_info() {
    assert_that!(*LogLevel::parse("DEBUG"), eq(LevelFilter::Debug));
    assert_that!(*LogLevel::parse("off"), eq(LevelFilter::Off));
    assert_that!(*LogLevel::parse("loud"), eq(LevelFilter::Info));
}

#[test]
fn given_toml_level_when_deserialize_then_lenient() {
    let config: LoggingConfig = toml::from_str("level = \"trace\"\ncolored = false").unwrap();
    assert_that!(*config.level, eq(LevelFilter::Trace));
    assert_that!(config.colored, eq(false));

    let config: LoggingConfig = toml::from_str("level = \"chatty\"").unwrap();
    assert_that!(*config.level, eq(LevelFilter::Info));
}

#[test]
fn given_blank_file_when_validate_then_error() {
    let config = LoggingConfig {
        file: Some("".into()),
        ..LoggingConfig::default()
    };
    assert_that!(config.validate(), err(anything()));
}
