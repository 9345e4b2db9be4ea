//! Per-document search results and their combination across query terms.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::query::span::Span;

/// Matches of one or more terms on a single document line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatch {
    /// 1-based line number within the document.
    pub line_no: usize,
    /// The line in its original casing.
    pub text: String,
    /// Match spans, in the order the terms were combined.
    pub spans: Vec<Span>,
}

impl LineMatch {
    /// Create a new line match.
    pub fn new<S: Into<String>>(line_no: usize, text: S, spans: Vec<Span>) -> Self {
        LineMatch {
            line_no,
            text: text.into(),
            spans,
        }
    }
}

/// The outcome of searching one document.
///
/// Unless a document was gated out by an AND query (see
/// [`crate::query::engine::QueryEngine`]), `matches` equals the number of
/// title spans plus the number of spans on all line matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The document title in its original casing.
    pub title: String,
    /// Match spans within the title.
    pub title_spans: Vec<Span>,
    /// Lines with at least one match, ascending by line number.
    pub line_matches: Vec<LineMatch>,
    /// Raw occurrence count.
    pub matches: usize,
}

impl SearchResult {
    /// Create a result, deriving `matches` from the spans.
    pub fn new<S: Into<String>>(
        title: S,
        title_spans: Vec<Span>,
        line_matches: Vec<LineMatch>,
    ) -> Self {
        let mut result = SearchResult {
            title: title.into(),
            title_spans,
            line_matches,
            matches: 0,
        };
        result.matches = result.span_count();
        result
    }

    /// An empty result for a document that matched nothing.
    pub fn empty<S: Into<String>>(title: S) -> Self {
        SearchResult::new(title, Vec::new(), Vec::new())
    }

    /// Count the spans held by this result.
    ///
    /// This differs from `matches` only for documents gated out of an AND
    /// query, whose stale spans are kept but no longer counted.
    pub fn span_count(&self) -> usize {
        self.title_spans.len()
            + self
                .line_matches
                .iter()
                .map(|lm| lm.spans.len())
                .sum::<usize>()
    }

    /// Check if this result counts as a hit.
    pub fn is_match(&self) -> bool {
        self.matches > 0
    }

    /// Combine the results of two different terms on the same document.
    ///
    /// Counts are summed unconditionally. Title spans are concatenated and
    /// sorted without merging. Line matches are united by line number; a line
    /// held by both sides gets `other`'s spans appended to `self`'s and keeps
    /// `self`'s text. Lines are copied out of both inputs, so the combined
    /// result never shares span lists with either of them.
    pub fn combine(&self, other: &SearchResult) -> SearchResult {
        let mut title_spans = Vec::with_capacity(self.title_spans.len() + other.title_spans.len());
        title_spans.extend_from_slice(&self.title_spans);
        title_spans.extend_from_slice(&other.title_spans);
        title_spans.sort_unstable();

        let mut lines_by_no: AHashMap<usize, LineMatch> = self
            .line_matches
            .iter()
            .map(|lm| (lm.line_no, lm.clone()))
            .collect();

        for lm in &other.line_matches {
            lines_by_no
                .entry(lm.line_no)
                .and_modify(|existing| existing.spans.extend_from_slice(&lm.spans))
                .or_insert_with(|| lm.clone());
        }

        let mut line_matches: Vec<LineMatch> = lines_by_no.into_values().collect();
        line_matches.sort_unstable_by_key(|lm| lm.line_no);

        SearchResult {
            title: self.title.clone(),
            title_spans,
            line_matches,
            matches: self.matches + other.matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(
        title_spans: &[(usize, usize)],
        lines: &[(usize, &str, &[(usize, usize)])],
    ) -> SearchResult {
        SearchResult::new(
            "Test",
            title_spans.iter().copied().map(Span::from).collect(),
            lines
                .iter()
                .map(|(no, text, spans)| {
                    LineMatch::new(*no, *text, spans.iter().copied().map(Span::from).collect())
                })
                .collect(),
        )
    }

    #[test]
    fn test_new_counts_spans() {
        let r = result(&[(0, 2)], &[(1, "a cat sat", &[(3, 5), (7, 9)])]);
        assert_eq!(r.matches, 3);
        assert_eq!(r.span_count(), 3);
        assert!(r.is_match());
        assert!(!SearchResult::empty("Test").is_match());
    }

    #[test]
    fn test_combine_sums_matches() {
        let a = result(&[(0, 2)], &[(1, "a cat sat", &[(3, 5)])]);
        let b = result(&[], &[(2, "a bat ran", &[(2, 5)])]);
        let combined = a.combine(&b);
        assert_eq!(combined.matches, a.matches + b.matches);
        assert_eq!(combined.span_count(), combined.matches);
    }

    #[test]
    fn test_combine_sorts_title_spans_without_merging() {
        let a = result(&[(4, 6), (0, 2)], &[]);
        let b = result(&[(0, 2), (1, 3)], &[]);
        let combined = a.combine(&b);
        assert_eq!(
            combined.title_spans,
            vec![Span::new(0, 2), Span::new(0, 2), Span::new(1, 3), Span::new(4, 6)]
        );
    }

    #[test]
    fn test_combine_unites_lines() {
        let a = result(&[], &[(3, "third", &[(0, 1)]), (1, "first", &[(0, 2)])]);
        let b = result(&[], &[(2, "second", &[(1, 2)]), (3, "third", &[(2, 4)])]);
        let combined = a.combine(&b);

        let line_nos: Vec<_> = combined.line_matches.iter().map(|lm| lm.line_no).collect();
        assert_eq!(line_nos, vec![1, 2, 3]);

        let third = &combined.line_matches[2];
        assert_eq!(third.text, "third");
        assert_eq!(third.spans, vec![Span::new(0, 1), Span::new(2, 4)]);
    }

    #[test]
    fn test_combine_leaves_inputs_untouched() {
        let a = result(&[], &[(1, "line", &[(0, 1)])]);
        let b = result(&[], &[(1, "line", &[(1, 2)])]);
        let a_before = a.clone();
        let b_before = b.clone();

        let mut combined = a.combine(&b);
        combined.line_matches[0].spans.push(Span::new(2, 3));

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_combine_is_commutative_in_counts() {
        let a = result(&[(0, 1)], &[(1, "x", &[(0, 1)]), (2, "y", &[(0, 1)])]);
        let b = result(&[], &[(2, "y", &[(0, 1)]), (4, "z", &[(0, 1)])]);

        let ab = a.combine(&b);
        let ba = b.combine(&a);
        assert_eq!(ab.matches, ba.matches);
        assert_eq!(ab.title_spans, ba.title_spans);

        let mut ab_spans: Vec<_> = ab.line_matches.iter().flat_map(|lm| lm.spans.clone()).collect();
        let mut ba_spans: Vec<_> = ba.line_matches.iter().flat_map(|lm| lm.spans.clone()).collect();
        ab_spans.sort();
        ba_spans.sort();
        assert_eq!(ab_spans, ba_spans);
    }
}
