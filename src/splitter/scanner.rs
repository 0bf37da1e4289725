use std::{iter::FusedIterator, str::Chars};

use log::{debug, trace};

use super::{RemoveEmptySegments, SplitOptions};
use crate::{char_reader::CharReader, ComparisonMode, Span};

/// Splits text on a fixed multi-character delimiter in a single left-to-right pass.
///
/// The delimiter is matched with a single cursor: a character that breaks a partial match resets
/// the cursor and is not itself retried as the start of a new match, so self-overlapping
/// delimiters are not searched for exhaustively. A delimiter ending the text yields one trailing
/// empty segment.
///
/// An empty delimiter splits on every white-space character instead, so `n` white-space
/// characters always produce `n + 1` segments.
#[must_use]
#[derive(Clone, Debug)]
pub struct Splitter<'a> {
    text: &'a str,
    chars: CharReader<'a>,
    delimiter: &'a str,
    mode: ComparisonMode,
    pending: Option<Span<&'a str>>,
    finished: bool,
}

impl<'a> Splitter<'a> {
    pub fn new(text: &'a str, delimiter: &'a str) -> Self {
        Self {
            text,
            chars: CharReader::new(text),
            delimiter,
            mode: ComparisonMode::Ordinal,
            pending: None,
            finished: false,
        }
    }

    pub fn comparison(mut self, mode: ComparisonMode) -> Self {
        self.mode = mode;
        self
    }

    fn segment(&self, range: std::ops::Range<usize>) -> Span<&'a str> {
        Span::from_parts(&self.text[range.clone()], range)
    }

    fn next_delimited(&mut self) -> Option<Span<&'a str>> {
        let start_pos = self.chars.current_pos();
        let mut match_start = start_pos;
        let mut expected: Chars<'a> = self.delimiter.chars();

        loop {
            let pos = self.chars.current_pos();

            let Some(c) = self.chars.next() else {
                self.finished = true;
                break (pos > start_pos).then(|| self.segment(start_pos..pos));
            };

            let mut advanced = expected.clone();
            if advanced.next().is_some_and(|d| self.mode.chars_eq(c, d)) {
                if expected.as_str().len() == self.delimiter.len() {
                    match_start = pos;
                }
                expected = advanced;

                if expected.as_str().is_empty() {
                    trace!(
                        "delimiter matched at {}..{}",
                        match_start,
                        self.chars.current_pos()
                    );

                    if self.chars.is_at_end() {
                        let end = self.text.len();
                        self.pending = Some(self.segment(end..end));
                        self.finished = true;
                    }

                    break Some(self.segment(start_pos..match_start));
                }
            } else {
                expected = self.delimiter.chars();
            }
        }
    }

    fn next_whitespace_delimited(&mut self) -> Option<Span<&'a str>> {
        let start_pos = self.chars.current_pos();

        loop {
            let pos = self.chars.current_pos();

            match self.chars.next() {
                None => {
                    self.finished = true;
                    break Some(self.segment(start_pos..pos));
                }
                Some(c) if c.is_whitespace() => break Some(self.segment(start_pos..pos)),
                Some(_) => {}
            }
        }
    }
}

impl<'a> Iterator for Splitter<'a> {
    type Item = Span<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            Some(pending)
        } else if self.finished {
            None
        } else if self.delimiter.is_empty() {
            self.next_whitespace_delimited()
        } else {
            self.next_delimited()
        }
    }
}

impl FusedIterator for Splitter<'_> {}

/// Splits `text` on `delimiter` with ordinal comparison.
pub fn split<'a>(text: &'a str, delimiter: &'a str, remove_empty: bool) -> Vec<&'a str> {
    split_with(text, delimiter, remove_empty.into(), ComparisonMode::Ordinal)
}

pub fn split_with<'a>(
    text: &'a str,
    delimiter: &'a str,
    options: SplitOptions,
    mode: ComparisonMode,
) -> Vec<&'a str> {
    let splitter = Splitter::new(text, delimiter).comparison(mode);

    let segments: Vec<&str> = if options.remove_empty() {
        splitter.remove_empty().map(Span::into_value).collect()
    } else {
        splitter.map(Span::into_value).collect()
    };

    debug!(
        "split {} bytes on {:?} into {} segments ({})",
        text.len(),
        delimiter,
        segments.len(),
        options
    );
    segments
}
