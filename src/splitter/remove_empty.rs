use std::iter::FusedIterator;

use crate::Span;

/// Drops zero-length segments from an underlying segment iterator.
#[must_use]
#[derive(Clone, Debug)]
pub struct RemoveEmpty<Iter> {
    segments: Iter,
}

impl<'a, Iter: Iterator<Item = Span<&'a str>>> Iterator for RemoveEmpty<Iter> {
    type Item = Span<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        self.segments.find(|segment| !segment.value().is_empty())
    }
}

impl<'a, Iter: FusedIterator<Item = Span<&'a str>>> FusedIterator for RemoveEmpty<Iter> {}

pub trait RemoveEmptySegments<'a> {
    type Result: Iterator<Item = Span<&'a str>>;

    fn remove_empty(self) -> Self::Result;
}

impl<'a, IntoIter: IntoIterator<Item = Span<&'a str>>> RemoveEmptySegments<'a> for IntoIter {
    type Result = RemoveEmpty<IntoIter::IntoIter>;

    fn remove_empty(self) -> Self::Result {
        RemoveEmpty {
            segments: self.into_iter(),
        }
    }
}
