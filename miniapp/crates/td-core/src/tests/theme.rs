use crate::{ColorScheme, ThemeMode};

use std::str::FromStr;

#[test]
fn test_theme_mode_toggle_cycles_through_all_modes() {
    let mut mode = ThemeMode::default();
    assert_eq!(mode, ThemeMode::System);

    mode = mode.toggled();
    assert_eq!(mode, ThemeMode::Dark);
    mode = mode.toggled();
    assert_eq!(mode, ThemeMode::Light);
    mode = mode.toggled();
    assert_eq!(mode, ThemeMode::System);
}

#[test]
fn test_theme_mode_resolve() {
    assert_eq!(ThemeMode::System.resolve(Some(ColorScheme::Dark)), ColorScheme::Dark);
    assert_eq!(ThemeMode::System.resolve(None), ColorScheme::Light);
    assert_eq!(ThemeMode::Light.resolve(Some(ColorScheme::Dark)), ColorScheme::Light);
    assert_eq!(ThemeMode::Dark.resolve(None), ColorScheme::Dark);
}

#[test]
fn test_color_scheme_from_str() {
    assert_eq!(ColorScheme::from_str("Dark").unwrap(), ColorScheme::Dark);
    assert!(ColorScheme::from_str("sepia").is_err());
    assert!(ColorScheme::Dark.is_dark());
}
