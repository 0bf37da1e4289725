//! Helpers over lists of strings.

use crate::{
    trim_any, trim_chars, trim_end_any, trim_end_chars, trim_start_any, trim_start_chars,
    ComparisonMode, SegmentError,
};

/// Joins a window of a string list with a delimiter, optionally quoting every item.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Joiner<'a> {
    delimiter: &'a str,
    start: usize,
    count: Option<usize>,
    quotation: Option<&'a str>,
}

impl<'a> Joiner<'a> {
    pub fn new(delimiter: &'a str) -> Self {
        Self {
            delimiter,
            start: 0,
            count: None,
            quotation: None,
        }
    }

    /// Index of the first item to join.
    pub fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Number of items to join; all remaining items when not set.
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn quotation(mut self, quotation: &'a str) -> Self {
        self.quotation = Some(quotation).filter(|q| !q.is_empty());
        self
    }

    pub fn join<S: AsRef<str>>(&self, items: &[S]) -> Result<String, SegmentError> {
        if items.is_empty() {
            return Ok(String::new());
        }

        if self.start >= items.len() {
            return Err(SegmentError::precondition(
                "start",
                format!("{} must be between 0 and {}", self.start, items.len() - 1),
            ));
        }

        let available = items.len() - self.start;
        let count = self.count.unwrap_or(available);
        if count > available {
            return Err(SegmentError::precondition(
                "count",
                format!("{} exceeds the {} items from index {}", count, available, self.start),
            ));
        }

        let quotation = self.quotation.unwrap_or("");
        let mut result = String::new();

        for (index, item) in items[self.start..self.start + count].iter().enumerate() {
            if index > 0 {
                result.push_str(self.delimiter);
            }
            result.push_str(quotation);
            result.push_str(item.as_ref());
            result.push_str(quotation);
        }

        Ok(result)
    }
}

impl Default for Joiner<'_> {
    fn default() -> Self {
        Self::new(" ")
    }
}

/// Trims every item and drops the ones left empty.
pub fn purge<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether any item equals `value` under `mode`.
pub fn contains<S: AsRef<str>>(items: &[S], value: &str, mode: ComparisonMode) -> bool {
    items.iter().any(|item| mode.str_eq(item.as_ref(), value))
}

/// Moves the item at `from` so that it sits right before the item currently at `to`.
///
/// Both indices must refer to existing items. Moving forward therefore lands the item at
/// `to - 1`, since removing it shifts the later items down by one.
pub fn move_element<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), SegmentError> {
    for (argument, index) in [("from", from), ("to", to)] {
        if index >= items.len() {
            return Err(SegmentError::precondition(
                argument,
                format!("{} is out of range for {} items", index, items.len()),
            ));
        }
    }

    if from != to {
        let item = items.remove(from);
        items.insert(if to > from { to - 1 } else { to }, item);
    }

    Ok(())
}

/// Applies [`trim_start_any`] to every item.
pub fn trim_start_items<'a, S: AsRef<str>, P: AsRef<str>>(
    items: &'a [S],
    patterns: &[P],
    mode: ComparisonMode,
) -> Vec<&'a str> {
    items
        .iter()
        .map(|item| trim_start_any(item.as_ref(), patterns, mode))
        .collect()
}

pub fn trim_end_items<'a, S: AsRef<str>, P: AsRef<str>>(
    items: &'a [S],
    patterns: &[P],
    mode: ComparisonMode,
) -> Vec<&'a str> {
    items
        .iter()
        .map(|item| trim_end_any(item.as_ref(), patterns, mode))
        .collect()
}

pub fn trim_items<'a, S: AsRef<str>, P: AsRef<str>>(
    items: &'a [S],
    patterns: &[P],
    mode: ComparisonMode,
) -> Vec<&'a str> {
    items
        .iter()
        .map(|item| trim_any(item.as_ref(), patterns, mode))
        .collect()
}

/// Removes leading characters of `set` from every item, or leading white space when no set is
/// given.
pub fn trim_start_item_chars<'a, S: AsRef<str>>(
    items: &'a [S],
    set: Option<&[char]>,
) -> Vec<&'a str> {
    items
        .iter()
        .map(|item| match set {
            Some(set) => trim_start_chars(item.as_ref(), set),
            None => item.as_ref().trim_start(),
        })
        .collect()
}

pub fn trim_end_item_chars<'a, S: AsRef<str>>(
    items: &'a [S],
    set: Option<&[char]>,
) -> Vec<&'a str> {
    items
        .iter()
        .map(|item| match set {
            Some(set) => trim_end_chars(item.as_ref(), set),
            None => item.as_ref().trim_end(),
        })
        .collect()
}

pub fn trim_item_chars<'a, S: AsRef<str>>(
    items: &'a [S],
    set: Option<&[char]>,
) -> Vec<&'a str> {
    items
        .iter()
        .map(|item| match set {
            Some(set) => trim_chars(item.as_ref(), set),
            None => item.as_ref().trim(),
        })
        .collect()
}
