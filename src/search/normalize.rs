use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block stripped after decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Lowercases `text` and strips diacritics ("José" -> "jose").
///
/// Whitespace is left alone; only the query is trimmed.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}
