mod char_reader;
mod compare;
mod error;
mod ext;
mod span;
mod splitter;
mod tokenizer;
mod trimmer;

pub mod list;
pub mod report;
pub mod text;

#[cfg(test)]
mod test_utils;

pub use compare::ComparisonMode;
pub use error::SegmentError;
pub use ext::Segment;
pub use span::Span;
pub use splitter::{split, split_with, RemoveEmpty, RemoveEmptySegments, SplitOptions, Splitter};
pub use tokenizer::{
    tokenize, tokenize_with, Tokenizer, TokenizerConfig, DEFAULT_QUOTE, DEFAULT_SEPARATOR,
};
pub use trimmer::{
    trim, trim_any, trim_boundary, trim_chars, trim_end, trim_end_any, trim_end_chars,
    trim_start, trim_start_any, trim_start_chars, Boundary,
};
