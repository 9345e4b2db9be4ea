//! Integration tests for query evaluation, combination and highlighting.

use stanza::highlight::{HighlightConfig, Highlighter};
use stanza::prelude::*;
use stanza::query::{find_spans, merge_spans, search_document};

fn love_and_fool() -> QueryEngine {
    QueryEngine::new(vec![
        Document::builder()
            .title("Sonnet 116")
            .add_line("Let me not to the marriage of true minds")
            .add_line("Love is not love")
            .add_line("Which alters when it alteration finds,")
            .build(),
        Document::builder()
            .title("Twelfth Night")
            .add_line("Better a witty fool than a foolish wit.")
            .add_line("If music be the food of love, play on")
            .build(),
    ])
}

#[test]
fn test_span_discovery_and_merge() {
    assert_eq!(find_spans("aaa", "aa"), vec![Span::new(0, 2), Span::new(1, 3)]);
    assert!(find_spans("abc", "").is_empty());
    assert_eq!(
        merge_spans(&[Span::new(0, 2), Span::new(2, 4), Span::new(5, 6)]),
        vec![Span::new(0, 4), Span::new(5, 6)]
    );
}

#[test]
fn test_and_gating() {
    let engine = love_and_fool();
    let results = engine.evaluate(&["love", "fool"], SearchMode::And);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].matches, 0);
    // love x1, fool x2 ("fool", "foolish")
    assert_eq!(results[1].matches, 3);
}

#[test]
fn test_or_sums_per_term_counts() {
    let engine = love_and_fool();
    let love = engine.evaluate(&["love"], SearchMode::Or);
    let fool = engine.evaluate(&["fool"], SearchMode::Or);
    let both = engine.evaluate(&["love", "fool"], SearchMode::Or);

    for i in 0..2 {
        assert_eq!(both[i].matches, love[i].matches + fool[i].matches);
    }
    assert_eq!(both[0].matches, 2);
    assert!(both.iter().all(SearchResult::is_match));
}

#[test]
fn test_term_order_does_not_change_counts() {
    let engine = love_and_fool();
    for mode in [SearchMode::And, SearchMode::Or] {
        let forward = engine.evaluate(&["love", "fool", "the"], mode);
        let backward = engine.evaluate(&["the", "fool", "love"], mode);
        let counts = |rs: &[SearchResult]| rs.iter().map(|r| r.matches).collect::<Vec<_>>();
        assert_eq!(counts(&forward), counts(&backward));
    }
}

#[test]
fn test_end_to_end_document_level_gate() {
    let engine = QueryEngine::new(vec![Document::new("Test", ["a cat sat", "a bat ran"])]);

    let or = engine.evaluate(&["at"], SearchMode::Or);
    assert_eq!(or[0].matches, 3);
    assert!(or[0].title_spans.is_empty());
    assert_eq!(or[0].line_matches.len(), 2);

    // "bat" and "cat" never share a line; the gate only looks at document counts.
    let and = engine.evaluate(&["cat", "bat"], SearchMode::And);
    assert_eq!(and[0].matches, 2);
    assert_eq!(and[0].line_matches.len(), 2);
}

#[test]
fn test_combined_result_invariant() {
    let engine = love_and_fool();
    for doc in engine.documents() {
        let a = search_document(doc, "o");
        let b = search_document(doc, "love");
        let combined = a.combine(&b);

        assert_eq!(combined.matches, a.matches + b.matches);
        assert_eq!(combined.matches, combined.span_count());
        assert!(combined.line_matches.windows(2).all(|w| w[0].line_no < w[1].line_no));
        assert!(combined.line_matches.iter().all(|lm| !lm.spans.is_empty()));
    }
}

#[test]
fn test_highlight_matches_in_results() {
    let engine = love_and_fool();
    let highlighter = Highlighter::new(HighlightConfig::brackets("{", "}"));
    let results = engine.evaluate(&["love", "lo"], SearchMode::Or);

    let line = &results[0].line_matches[0];
    assert_eq!(line.line_no, 2);
    assert_eq!(highlighter.highlight(&line.text, &line.spans), "{Love} is not {love}");
}

#[test]
fn test_parallel_evaluation_agrees() {
    let engine = love_and_fool();
    let terms = ["o", "fool", "wit"];
    for mode in [SearchMode::And, SearchMode::Or] {
        assert_eq!(engine.evaluate(&terms, mode), engine.evaluate_parallel(&terms, mode));
    }
}

#[test]
fn test_highlight_after_case_folding_changes_length() {
    let engine = QueryEngine::new(vec![Document::new(
        "\u{212A}elvin love",
        ["\u{2126}hm my love", "\u{212B}ngstr\u{f6}m LOVE"],
    )]);
    let highlighter = Highlighter::new(HighlightConfig::brackets("[", "]"));
    let result = &engine.evaluate(&["love"], SearchMode::Or)[0];

    assert_eq!(
        highlighter.highlight(&result.title, &result.title_spans),
        "\u{212A}elvin [love]"
    );
    let rendered: Vec<String> = result
        .line_matches
        .iter()
        .map(|lm| highlighter.highlight(&lm.text, &lm.spans))
        .collect();
    assert_eq!(rendered, vec!["\u{2126}hm my [love]", "\u{212B}ngstr\u{f6}m [LOVE]"]);
}
