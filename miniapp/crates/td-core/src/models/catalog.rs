/// Interest ids offered by the profile form. Labels live in the locale catalog
/// under `interests.<id>`.
pub const INTERESTS: [&str; 16] = [
    "sports",
    "music",
    "movies",
    "books",
    "travel",
    "cooking",
    "art",
    "technology",
    "nature",
    "photography",
    "dancing",
    "yoga",
    "gaming",
    "fashion",
    "cars",
    "animals",
];

/// Spoken-language codes offered by the profile form.
pub const LANGUAGES: [&str; 20] = [
    "ru", "en", "es", "fr", "de", "it", "zh", "ja", "ko", "ar", "pt", "tr", "pl", "cs", "hu", "fi",
    "sv", "no", "da", "nl",
];

pub fn is_known_interest(id: &str) -> bool {
    INTERESTS.contains(&id)
}

pub fn is_known_language(code: &str) -> bool {
    LANGUAGES.contains(&code)
}
