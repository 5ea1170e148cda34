//! Byte-offset spans into a compilation unit's source text.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)`.
///
/// Spans come from the front end and are trusted only as far as
/// [`Span::slice`] allows: a span that does not fit the text yields `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The text covered by this span, if it is non-empty and lies on char
    /// boundaries inside `source`.
    pub fn slice(self, source: &str) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        source.get(self.start as usize..self.end as usize)
    }
}

#[cfg(test)]
#[path = "../tests/span_tests.rs"]
mod tests;
