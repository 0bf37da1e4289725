mod config;
mod scanner;

pub use config::{TokenizerConfig, DEFAULT_QUOTE, DEFAULT_SEPARATOR};
pub use scanner::{tokenize, tokenize_with, Tokenizer};
