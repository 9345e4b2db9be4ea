//! Single-term search over one document.

use crate::document::Document;
use crate::query::result::{LineMatch, SearchResult};
use crate::query::span::{Span, find_spans};

/// Search a document's title and lines for one term, ignoring case.
///
/// Only lines with at least one match produce a [`LineMatch`]; the match
/// keeps the line's original casing. Spans always index the characters of
/// the original title or line, even where lower-casing changes a character's
/// encoded length or expands it into several characters.
pub fn search_document(document: &Document, term: &str) -> SearchResult {
    let term = lowercase(term);

    let title_spans = find_folded(&document.title, &term);

    let line_matches = document
        .numbered_lines()
        .filter_map(|(line_no, line)| {
            let spans = find_folded(line, &term);
            (!spans.is_empty()).then(|| LineMatch::new(line_no, line, spans))
        })
        .collect();

    SearchResult::new(document.title.clone(), title_spans, line_matches)
}

fn lowercase(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Find a lower-cased `term` in `text` and map the spans back onto `text`.
fn find_folded(text: &str, term: &str) -> Vec<Span> {
    // origin[i] is the position in `text` of the char that produced folded char i.
    let mut folded = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (pos, c) in text.chars().enumerate() {
        for lower in c.to_lowercase() {
            folded.push(lower);
            origin.push(pos);
        }
    }

    find_spans(&folded, term)
        .into_iter()
        .map(|span| Span::new(origin[span.start], origin[span.end - 1] + 1))
        .collect()
}
