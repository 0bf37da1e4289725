pub const DEFAULT_QUOTE: char = '"';
pub const DEFAULT_SEPARATOR: char = ' ';

/// Quote and extra separator used by a [`Tokenizer`](super::Tokenizer).
///
/// Space and tab always separate tokens; `separator` adds one more character to that set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerConfig {
    pub quote: char,
    pub separator: char,
}

impl TokenizerConfig {
    pub const fn new() -> Self {
        Self {
            quote: DEFAULT_QUOTE,
            separator: DEFAULT_SEPARATOR,
        }
    }

    pub const fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub const fn is_separator(&self, c: char) -> bool {
        matches!(c, ' ' | '\t') || c == self.separator
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::new()
    }
}
