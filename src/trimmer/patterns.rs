use log::trace;

use crate::ComparisonMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    Start,
    End,
}

impl Boundary {
    /// Strips `pattern` from this boundary of `text` if it is anchored there.
    fn strip<'a>(self, text: &'a str, pattern: &str, mode: ComparisonMode) -> Option<&'a str> {
        match self {
            Self::Start => mode.prefix_len(text, pattern).map(|len| &text[len..]),
            Self::End => mode
                .suffix_len(text, pattern)
                .map(|len| &text[..text.len() - len]),
        }
    }
}

/// Empty and white-space-only patterns never match.
fn is_absent(pattern: &str) -> bool {
    pattern.trim().is_empty()
}

/// Strips the first pattern, in order, that is anchored at `boundary`.
fn strip_first<'a, P: AsRef<str>>(
    text: &'a str,
    patterns: &[P],
    boundary: Boundary,
    mode: ComparisonMode,
) -> Option<&'a str> {
    patterns
        .iter()
        .map(AsRef::as_ref)
        .filter(|pattern| !is_absent(pattern))
        .find_map(|pattern| boundary.strip(text, pattern, mode))
}

/// Removes patterns from `boundary` until a full pass over `patterns` finds none anchored there.
///
/// Every successful pass restarts from the first pattern, so a later pattern can expose a
/// boundary that an earlier one matches. Each removal shortens the text by at least one
/// character, which bounds the number of passes by the length of the text.
pub fn trim_boundary<'a, P: AsRef<str>>(
    text: &'a str,
    patterns: &[P],
    boundary: Boundary,
    mode: ComparisonMode,
) -> &'a str {
    if text.trim().is_empty() {
        return text;
    }

    let mut current = text;
    while let Some(shorter) = strip_first(current, patterns, boundary, mode) {
        trace!(
            "trimmed {} bytes at {:?}",
            current.len() - shorter.len(),
            boundary
        );
        current = shorter;
    }

    current
}

pub fn trim_start<'a>(text: &'a str, pattern: &str, mode: ComparisonMode) -> &'a str {
    trim_start_any(text, &[pattern], mode)
}

pub fn trim_end<'a>(text: &'a str, pattern: &str, mode: ComparisonMode) -> &'a str {
    trim_end_any(text, &[pattern], mode)
}

pub fn trim<'a>(text: &'a str, pattern: &str, mode: ComparisonMode) -> &'a str {
    trim_any(text, &[pattern], mode)
}

pub fn trim_start_any<'a, P: AsRef<str>>(
    text: &'a str,
    patterns: &[P],
    mode: ComparisonMode,
) -> &'a str {
    trim_boundary(text, patterns, Boundary::Start, mode)
}

pub fn trim_end_any<'a, P: AsRef<str>>(
    text: &'a str,
    patterns: &[P],
    mode: ComparisonMode,
) -> &'a str {
    trim_boundary(text, patterns, Boundary::End, mode)
}

pub fn trim_any<'a, P: AsRef<str>>(text: &'a str, patterns: &[P], mode: ComparisonMode) -> &'a str {
    trim_end_any(trim_start_any(text, patterns, mode), patterns, mode)
}
