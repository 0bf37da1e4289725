use std::iter::FusedIterator;

use log::{debug, trace};

use super::TokenizerConfig;
use crate::{char_reader::CharReader, Span};

/// Splits text into shell-argument-like tokens.
///
/// Unquoted space, tab and the configured extra separator end the current token. The quote
/// character toggles a quoted region in which separators are ordinary content; the quote itself
/// is never part of a token. An unterminated quote runs to the end of the input.
#[must_use]
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    chars: CharReader<'a>,
    config: TokenizerConfig,
    in_quote: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_config(text, TokenizerConfig::default())
    }

    pub fn with_config(text: &'a str, config: TokenizerConfig) -> Self {
        Self {
            chars: CharReader::new(text),
            config,
            in_quote: false,
        }
    }

    /// Whether the scan is currently inside a quoted region.
    pub fn in_quote(&self) -> bool {
        self.in_quote
    }

    fn next_token(&mut self) -> Option<Span<String>> {
        let mut buffer = String::new();
        let mut start_pos = self.chars.current_pos();

        loop {
            let pos = self.chars.current_pos();

            match self.chars.next() {
                None => break,

                Some(c) if self.config.is_separator(c) => {
                    if self.in_quote {
                        buffer.push(c);
                    } else if buffer.is_empty() {
                        // Runs of separators collapse, as do empty quoted regions
                        start_pos = self.chars.current_pos();
                    } else {
                        return Some(Span::from_parts(buffer, start_pos..pos));
                    }
                }

                Some(c) if c == self.config.quote => {
                    self.in_quote = !self.in_quote;
                    trace!(
                        "quote {} at byte {}",
                        if self.in_quote { "opened" } else { "closed" },
                        pos
                    );
                }

                Some(c) => buffer.push(c),
            }
        }

        if self.in_quote {
            trace!("quote left open at end of input");
        }

        let end_pos = self.chars.current_pos();
        (!buffer.is_empty()).then(|| Span::from_parts(buffer, start_pos..end_pos))
    }
}

impl<'a> From<&'a str> for Tokenizer<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Span<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenizes `text` with the default quote (`"`) and no extra separator.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, &TokenizerConfig::default())
}

pub fn tokenize_with(text: &str, config: &TokenizerConfig) -> Vec<String> {
    let tokens: Vec<String> = Tokenizer::with_config(text, *config)
        .map(Span::into_value)
        .collect();

    debug!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
    tokens
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{check_spans, check_values};

    fn check_tokens(source: &str, expected: impl AsRef<[&'static str]>) {
        check_values(Tokenizer::from(source), expected)
    }

    #[test]
    fn test_empty_source() {
        check_tokens("", []);
    }

    #[test]
    fn test_separator_only_source() {
        check_tokens("   ", []);
        check_tokens("\t \t", []);
    }

    #[test]
    fn test_separated_text() {
        check_tokens("-a: b /c --d efg", ["-a:", "b", "/c", "--d", "efg"]);
    }

    #[test]
    fn test_separator_runs_collapse() {
        check_tokens("  a \t\t b  ", ["a", "b"]);
    }

    #[test]
    fn test_quoted_text() {
        check_tokens(r#"-a:b /c --d "efg hij""#, ["-a:b", "/c", "--d", "efg hij"]);
    }

    #[test]
    fn test_condensed_quoted_text() {
        check_tokens(
            r#"-a:"b #1" /c --d="efg hij" "/k : l mn o""#,
            ["-a:b #1", "/c", "--d=efg hij", "/k : l mn o"],
        );
    }

    #[test]
    fn test_quoted_tab_is_content() {
        check_tokens("\"a\tb\" c", ["a\tb", "c"]);
    }

    #[test]
    fn test_empty_quotes() {
        check_tokens(r#"a "" b"#, ["a", "b"]);
        check_tokens(r#""""#, []);
        check_tokens(r#"x""y"#, ["xy"]);
    }

    #[test]
    fn test_unterminated_quote() {
        let mut tokenizer = Tokenizer::from(r#"a "b c"#);
        assert_eq!(tokenizer.next().map(Span::into_value), Some("a".to_string()));
        assert_eq!(tokenizer.next().map(Span::into_value), Some("b c".to_string()));
        assert!(tokenizer.in_quote());
        assert_eq!(tokenizer.next(), None);
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn test_extra_separator() {
        let config = TokenizerConfig::new().with_separator(',');
        assert_eq!(
            tokenize_with(r#"a,b c,"d,e",,"#, &config),
            ["a", "b", "c", "d,e"]
        );
    }

    #[test]
    fn test_custom_quote() {
        let config = TokenizerConfig::new().with_quote('\'');
        assert_eq!(
            tokenize_with(r#"'a b' "c d""#, &config),
            ["a b", "\"c", "d\""]
        );
    }

    #[test]
    fn test_quote_equal_to_separator_only_separates() {
        let config = TokenizerConfig::new().with_quote(',').with_separator(',');
        assert_eq!(tokenize_with("a,b c", &config), ["a", "b", "c"]);
    }

    #[test]
    fn test_without_quotes_matches_plain_split() {
        for text in ["a b\tc", "  lead", "trail \t", "x  \t y", "", "single"] {
            let expected: Vec<&str> = text
                .split([' ', '\t'])
                .filter(|s| !s.is_empty())
                .collect();
            assert_eq!(tokenize(text), expected, "input {:?}", text);
        }
    }

    #[test]
    fn test_token_ranges() {
        check_spans(
            Tokenizer::from(r#" ab "c d"  é"#),
            [
                Span::from_parts("ab".to_string(), 1..3),
                Span::from_parts("c d".to_string(), 4..9),
                Span::from_parts("é".to_string(), 11..13),
            ],
        );
    }
}
