//! Translation catalog keyed by string id.
//!
//! Tables ship as TOML resources (`locales/<code>.toml`), are flattened into
//! dotted keys (`form.validation.bioRequired`) and parsed once per process.
//! Lookups fall back to English, then to the key itself.

use crate::{CoreError, CoreResult};

use std::collections::HashMap;
use std::panic::Location;
use std::str::FromStr;
use std::sync::OnceLock;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const EN_SOURCE: &str = include_str!("../../locales/en.toml");
const RU_SOURCE: &str = include_str!("../../locales/ru.toml");

static BUILTIN: OnceLock<Translations> = OnceLock::new();

/// Interface languages with a full translation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const SUPPORTED: [Locale; 2] = [Locale::En, Locale::Ru];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Map a Telegram `language_code` (e.g. `ru`, `en-US`) to a supported locale
    pub fn from_language_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        Self::from_str(primary).ok()
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            _ => Err(CoreError::InvalidEnumValue {
                kind: "locale",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All loaded translation tables
#[derive(Debug, Clone, Default)]
pub struct Translations {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl Translations {
    /// The tables bundled with the crate, parsed on first use
    pub fn builtin() -> &'static Translations {
        BUILTIN.get_or_init(|| {
            Self::from_sources(&[(Locale::En, EN_SOURCE), (Locale::Ru, RU_SOURCE)])
                .unwrap_or_else(|e| {
                    log::error!("Bundled translations failed to load: {e}");
                    Translations::default()
                })
        })
    }

    /// Parse one TOML document per locale
    #[track_caller]
    pub fn from_sources(sources: &[(Locale, &str)]) -> CoreResult<Self> {
        let mut tables = HashMap::new();

        for (locale, source) in sources {
            let table: toml::Table = toml::from_str(source).map_err(|e| CoreError::Catalog {
                message: format!("{locale} table: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let mut flat = HashMap::new();
            flatten(None, &table, &mut flat);
            tables.insert(*locale, flat);
        }

        Ok(Self { tables })
    }

    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn key_count(&self, locale: Locale) -> usize {
        self.tables.get(&locale).map(HashMap::len).unwrap_or_default()
    }
}

fn flatten(prefix: Option<&str>, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (key, value) in table {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            toml::Value::Table(nested) => flatten(Some(&path), nested, out),
            toml::Value::String(text) => {
                out.insert(path, text.clone());
            }
            other => {
                out.insert(path, other.to_string());
            }
        }
    }
}

/// Translation lookups for one locale
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    locale: Locale,
    translations: &'a Translations,
}

impl Catalog<'static> {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            translations: Translations::builtin(),
        }
    }
}

impl<'a> Catalog<'a> {
    pub fn with_translations(locale: Locale, translations: &'a Translations) -> Self {
        Self {
            locale,
            translations,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Text for `key` in this locale, else English, else the key itself
    pub fn text<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.translations
            .get(self.locale, key)
            .or_else(|| self.translations.get(Locale::En, key))
            .unwrap_or(key)
    }

    /// Text with `{{name}}` placeholders substituted
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{{{name}}}}}"), value)
            })
    }
}
