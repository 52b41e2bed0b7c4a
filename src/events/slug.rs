use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DISALLOWED_CHARS: Regex = Regex::new(r"[^a-z0-9\s-]").unwrap();
    static ref SEPARATOR_RUNS: Regex = Regex::new(r"[\s-]+").unwrap();
}

/// Builds the URL slug of an event title.
///
/// Non-ASCII letters are dropped rather than transliterated, so "Maratón" becomes "maratn".
pub fn create_slug(title: &str) -> String {
    let lowercase = title.to_lowercase();
    let stripped = DISALLOWED_CHARS.replace_all(&lowercase, "");
    let hyphenated = SEPARATOR_RUNS.replace_all(&stripped, "-");

    hyphenated.trim_matches('-').to_string()
}
