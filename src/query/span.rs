//! Literal match spans.
//!
//! A [`Span`] marks one occurrence of a pattern inside a string as a
//! half-open range of character positions `[start, end)`. Spans are reported
//! raw by [`find_spans`], overlaps included, because match counts are taken
//! from them. [`merge_spans`] collapses them for rendering only.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` interval over a string's characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "span must not be empty");
        Span { start, end }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span covers nothing.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check if this span overlaps or touches another span.
    pub fn touches(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Span::new(start, end)
    }
}

/// Find every occurrence of `pattern` in `text`, overlapping ones included.
///
/// Matching is exact; callers lower-case both arguments for case-insensitive
/// search. An empty pattern matches nothing. Positions count characters, not
/// bytes.
///
/// ```
/// use stanza::query::span::{find_spans, Span};
///
/// assert_eq!(find_spans("aaa", "aa"), vec![Span::new(0, 2), Span::new(1, 3)]);
/// assert!(find_spans("abc", "").is_empty());
/// ```
pub fn find_spans(text: &str, pattern: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    if pattern.is_empty() || pattern.len() > text.len() {
        return spans;
    }

    let width = pattern.chars().count();
    for (pos, (offset, _)) in text.char_indices().enumerate() {
        if offset + pattern.len() > text.len() {
            break;
        }
        if text[offset..].starts_with(pattern) {
            spans.push(Span::new(pos, pos + width));
        }
    }

    spans
}

/// Merge overlapping and touching spans.
///
/// The output is sorted, non-overlapping and covers exactly the positions
/// covered by the input.
///
/// ```
/// use stanza::query::span::{merge_spans, Span};
///
/// let merged = merge_spans(&[Span::new(0, 2), Span::new(2, 4), Span::new(5, 6)]);
/// assert_eq!(merged, vec![Span::new(0, 4), Span::new(5, 6)]);
/// ```
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    let mut sorted = spans.to_vec();
    sorted.sort_unstable();

    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    for span in iter {
        if current.touches(&span) {
            current.end = current.end.max(span.end);
        } else {
            merged.push(current);
            current = span;
        }
    }

    merged.push(current);
    merged
}
