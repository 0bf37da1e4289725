use std::{fmt, str::FromStr};

use unic::ucd::case::is_cased;

use crate::SegmentError;

/// Character equality used by every pattern comparison of a call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ComparisonMode {
    /// Exact code point equality.
    #[default]
    Ordinal,
    /// Characters are equal when their lowercase mappings are equal.
    IgnoreCase,
}

impl ComparisonMode {
    pub fn chars_eq(self, a: char, b: char) -> bool {
        if a == b {
            return true;
        }

        match self {
            Self::Ordinal => false,
            Self::IgnoreCase => {
                is_cased(a) && is_cased(b) && a.to_lowercase().eq(b.to_lowercase())
            }
        }
    }

    pub fn str_eq(self, a: &str, b: &str) -> bool {
        match self {
            Self::Ordinal => a == b,
            Self::IgnoreCase => self.prefix_len(a, b) == Some(a.len()),
        }
    }

    /// Returns the byte length of the prefix of `text` that matches `pattern`, if any.
    pub fn prefix_len(self, text: &str, pattern: &str) -> Option<usize> {
        if self == Self::Ordinal {
            return text.starts_with(pattern).then_some(pattern.len());
        }

        let mut chars = text.chars();
        for expected in pattern.chars() {
            match chars.next() {
                Some(c) if self.chars_eq(c, expected) => {}
                _ => return None,
            }
        }

        Some(text.len() - chars.as_str().len())
    }

    /// Returns the byte length of the suffix of `text` that matches `pattern`, if any.
    pub fn suffix_len(self, text: &str, pattern: &str) -> Option<usize> {
        if self == Self::Ordinal {
            return text.ends_with(pattern).then_some(pattern.len());
        }

        let mut chars = text.chars();
        for expected in pattern.chars().rev() {
            match chars.next_back() {
                Some(c) if self.chars_eq(c, expected) => {}
                _ => return None,
            }
        }

        Some(text.len() - chars.as_str().len())
    }

    /// Finds the first occurrence of `pattern` in `text`, returning its byte range.
    pub fn find(self, text: &str, pattern: &str) -> Option<std::ops::Range<usize>> {
        if self == Self::Ordinal {
            return text.find(pattern).map(|start| start..start + pattern.len());
        }

        text.char_indices()
            .map(|(start, _)| start)
            .chain(std::iter::once(text.len()))
            .find_map(|start| {
                self.prefix_len(&text[start..], pattern)
                    .map(|len| start..start + len)
            })
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ordinal => "ordinal",
            Self::IgnoreCase => "ignore-case",
        })
    }
}

impl FromStr for ComparisonMode {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ordinal" => Ok(Self::Ordinal),
            "ignore-case" | "ignorecase" | "ordinal-ignore-case" | "ordinalignorecase" => {
                Ok(Self::IgnoreCase)
            }
            _ => Err(SegmentError::invalid_option("comparison", s)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ordinal_chars() {
        assert!(ComparisonMode::Ordinal.chars_eq('a', 'a'));
        assert!(!ComparisonMode::Ordinal.chars_eq('a', 'A'));
    }

    #[test]
    fn test_ignore_case_chars() {
        let mode = ComparisonMode::IgnoreCase;
        assert!(mode.chars_eq('a', 'A'));
        assert!(mode.chars_eq('Ä', 'ä'));
        assert!(mode.chars_eq('.', '.'));
        assert!(!mode.chars_eq('a', 'b'));
        assert!(!mode.chars_eq('1', '!'));
    }

    #[test]
    fn test_prefix_and_suffix() {
        let mode = ComparisonMode::IgnoreCase;
        assert_eq!(mode.prefix_len("ABCdef", "abc"), Some(3));
        assert_eq!(mode.prefix_len("AB", "abc"), None);
        assert_eq!(mode.suffix_len("defXYZ", "xyz"), Some(3));
        assert_eq!(mode.suffix_len("xyz", "wxyz"), None);

        assert_eq!(ComparisonMode::Ordinal.prefix_len("ABC", "abc"), None);
        assert_eq!(ComparisonMode::Ordinal.suffix_len("abc", "bc"), Some(2));
    }

    #[test]
    fn test_find() {
        assert_eq!(ComparisonMode::Ordinal.find("a--b", "--"), Some(1..3));
        assert_eq!(ComparisonMode::IgnoreCase.find("xxKEYxx", "key"), Some(2..5));
        assert_eq!(ComparisonMode::IgnoreCase.find("xx", "key"), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Ordinal".parse(), Ok(ComparisonMode::Ordinal));
        assert_eq!("ignore-case".parse(), Ok(ComparisonMode::IgnoreCase));
        assert_eq!(
            "culture".parse::<ComparisonMode>(),
            Err(SegmentError::InvalidOption {
                option: "comparison",
                value: "culture".to_string(),
            })
        );
    }
}
