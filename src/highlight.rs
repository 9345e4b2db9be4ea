//! Inline highlighting of match spans.
//!
//! Spans are merged first (see [`merge_spans`]) so that overlapping or
//! touching matches render as one highlighted region.

use crate::query::span::{Span, merge_spans};

/// ANSI yellow background with black text.
pub const ANSI_HIGHLIGHT_START: &str = "\x1b[43m\x1b[30m";
/// ANSI reset.
pub const ANSI_HIGHLIGHT_END: &str = "\x1b[0m";

/// Markers placed around highlighted regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    /// Inserted before each highlighted region.
    pub open: String,
    /// Inserted after each highlighted region.
    pub close: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            open: ANSI_HIGHLIGHT_START.to_string(),
            close: ANSI_HIGHLIGHT_END.to_string(),
        }
    }
}

impl HighlightConfig {
    /// Terminal colors.
    pub fn ansi() -> Self {
        Self::default()
    }

    /// Any bracketing scheme, e.g. `("[", "]")` or `("<mark>", "</mark>")`.
    pub fn brackets<O: Into<String>, C: Into<String>>(open: O, close: C) -> Self {
        HighlightConfig {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Wraps matched regions of a string in markers.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a new highlighter.
    pub fn new(config: HighlightConfig) -> Self {
        Highlighter { config }
    }

    /// Get the marker configuration.
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Highlight `spans` within `text`.
    ///
    /// All and only the characters covered by the merged spans are wrapped;
    /// the rest of the text is copied unchanged. Without spans the text is
    /// returned as is. Span positions count characters; positions past the
    /// end of `text` are clamped to it.
    ///
    /// ```
    /// use stanza::highlight::{HighlightConfig, Highlighter};
    /// use stanza::query::span::Span;
    ///
    /// let highlighter = Highlighter::new(HighlightConfig::brackets("[", "]"));
    /// let out = highlighter.highlight("aaab", &[Span::new(0, 2), Span::new(1, 3)]);
    /// assert_eq!(out, "[aaa]b");
    /// ```
    pub fn highlight(&self, text: &str, spans: &[Span]) -> String {
        if spans.is_empty() {
            return text.to_string();
        }

        // Byte offset of every char, plus the end of the text.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = bounds.len() - 1;

        let mut result = String::with_capacity(text.len() + spans.len() * 8);
        let mut last_pos = 0;

        for span in merge_spans(spans) {
            let start = span.start.max(last_pos).min(char_count);
            let end = span.end.min(char_count);
            if start >= end {
                continue;
            }

            result.push_str(&text[bounds[last_pos]..bounds[start]]);
            result.push_str(&self.config.open);
            result.push_str(&text[bounds[start]..bounds[end]]);
            result.push_str(&self.config.close);
            last_pos = end;
        }

        result.push_str(&text[bounds[last_pos]..]);
        result
    }
}
