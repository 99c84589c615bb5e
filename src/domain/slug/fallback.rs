/// Hiragana, Katakana and CJK Unified Ideographs.
const CJK_RANGES: [(char, char); 3] = [
    ('\u{3040}', '\u{309F}'),
    ('\u{30A0}', '\u{30FF}'),
    ('\u{4E00}', '\u{9FAF}'),
];

pub fn contains_cjk(text: &str) -> bool {
    text.chars()
        .any(|ch| CJK_RANGES.iter().any(|(lo, hi)| (*lo..=*hi).contains(&ch)))
}

fn is_short_numeric(slug: &str) -> bool {
    (1..=3).contains(&slug.len()) && slug.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `slug` (derived from `original`) must be replaced by a generated
/// fallback.
///
/// Normalization silently discards Japanese and Chinese characters, so any
/// such text forces a fallback even when some ASCII survived. Bare numbers of
/// one to three digits are rejected as ambiguous; longer ones (dates such as
/// `20241129`) are kept.
pub fn needs_fallback(slug: &str, original: &str) -> bool {
    slug.is_empty() || contains_cjk(original) || is_short_numeric(slug)
}
