use crate::{
    trim_any, trim_end_any, trim_start_any, ComparisonMode, Splitter, Tokenizer, TokenizerConfig,
};

/// Method-call access to the tokenizer, splitter and pattern trimmer.
///
/// Trimming methods carry a `_pattern` suffix so they do not collide with the inherent
/// `str::trim_start` family.
pub trait Segment {
    fn tokens(&self) -> Tokenizer<'_>;
    fn tokens_with(&self, config: TokenizerConfig) -> Tokenizer<'_>;
    fn segments<'a>(&'a self, delimiter: &'a str) -> Splitter<'a>;

    fn trim_start_pattern<P: AsRef<str>>(&self, patterns: &[P], mode: ComparisonMode) -> &str;
    fn trim_end_pattern<P: AsRef<str>>(&self, patterns: &[P], mode: ComparisonMode) -> &str;
    fn trim_pattern<P: AsRef<str>>(&self, patterns: &[P], mode: ComparisonMode) -> &str;
}

impl Segment for str {
    fn tokens(&self) -> Tokenizer<'_> {
        Tokenizer::new(self)
    }

    fn tokens_with(&self, config: TokenizerConfig) -> Tokenizer<'_> {
        Tokenizer::with_config(self, config)
    }

    fn segments<'a>(&'a self, delimiter: &'a str) -> Splitter<'a> {
        Splitter::new(self, delimiter)
    }

    fn trim_start_pattern<P: AsRef<str>>(&self, patterns: &[P], mode: ComparisonMode) -> &str {
        trim_start_any(self, patterns, mode)
    }

    fn trim_end_pattern<P: AsRef<str>>(&self, patterns: &[P], mode: ComparisonMode) -> &str {
        trim_end_any(self, patterns, mode)
    }

    fn trim_pattern<P: AsRef<str>>(&self, patterns: &[P], mode: ComparisonMode) -> &str {
        trim_any(self, patterns, mode)
    }
}
