use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("static slug pattern"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("static slug pattern"));

/// Convert display text into a lowercase, hyphen-separated ASCII slug.
///
/// Characters outside `[a-z0-9_]`, whitespace and `-` are dropped rather than
/// transliterated, so non-Latin input may reduce to an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let stripped = DISALLOWED.replace_all(lowered.trim(), "");
    let joined = SEPARATORS.replace_all(&stripped, "-");

    joined.trim_matches('-').to_string()
}
