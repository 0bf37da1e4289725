//! Single-pass search and formatting helpers that honor a [`ComparisonMode`].

use crate::ComparisonMode;

/// Returns the position of the first pattern, in list order, found anywhere in `text`.
///
/// Patterns are tried one after another; the result belongs to the first pattern that occurs at
/// all, not to the leftmost occurrence across all patterns.
pub fn index_of_any<P: AsRef<str>>(
    text: &str,
    patterns: &[P],
    mode: ComparisonMode,
) -> Option<usize> {
    if text.is_empty() {
        return None;
    }

    patterns
        .iter()
        .find_map(|pattern| mode.find(text, pattern.as_ref()))
        .map(|range| range.start)
}

/// Character form of [`index_of_any`].
pub fn index_of_any_char(text: &str, chars: &[char], mode: ComparisonMode) -> Option<usize> {
    chars.iter().find_map(|&expected| {
        text.char_indices()
            .find(|&(_, c)| mode.chars_eq(c, expected))
            .map(|(pos, _)| pos)
    })
}

pub fn starts_with_any<P: AsRef<str>>(text: &str, patterns: &[P], mode: ComparisonMode) -> bool {
    patterns
        .iter()
        .any(|pattern| mode.prefix_len(text, pattern.as_ref()).is_some())
}

pub fn contains(text: &str, pattern: &str, mode: ComparisonMode) -> bool {
    mode.find(text, pattern).is_some()
}

/// Replaces every non-overlapping occurrence of `from`, scanning left to right.
///
/// Replacement text is never searched again. An empty `from` leaves `text` unchanged.
pub fn replace(text: &str, from: &str, to: &str, mode: ComparisonMode) -> String {
    if from.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(range) = mode.find(rest, from) {
        result.push_str(&rest[..range.start]);
        result.push_str(to);
        rest = &rest[range.end..];
    }

    result.push_str(rest);
    result
}

pub fn replace_any<P: AsRef<str>>(
    text: &str,
    from: &[P],
    to: &str,
    mode: ComparisonMode,
) -> String {
    from.iter()
        .fold(text.to_string(), |acc, pattern| replace(&acc, pattern.as_ref(), to, mode))
}

/// Compares two texts treating `\r\n` and `\n` line breaks as equal.
pub fn content_equals(a: &str, b: &str) -> bool {
    a.replace("\r\n", "\n") == b.replace("\r\n", "\n")
}

/// Uppercases the first character. Blank text is returned as is.
pub fn capitalize(text: &str) -> String {
    map_first_char(text, char::to_uppercase)
}

/// Lowercases the first character. Blank text is returned as is.
pub fn decapitalize(text: &str) -> String {
    map_first_char(text, char::to_lowercase)
}

fn map_first_char<I: Iterator<Item = char>>(text: &str, f: impl FnOnce(char) -> I) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => f(first).chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `text`, ignoring surrounding white space, parses as a floating point number.
pub fn is_numeric(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok()
}
