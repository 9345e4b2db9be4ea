//! Criterion benchmarks for Stanza query evaluation.
//!
//! Covers the hot paths of a query:
//! - Span discovery on single lines
//! - Single and multi-term evaluation in AND and OR mode
//! - Sequential versus parallel evaluation
//! - Highlight rendering

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use stanza::document::Document;
use stanza::highlight::Highlighter;
use stanza::query::{QueryEngine, SearchMode, find_spans, search_document};
use std::hint::black_box;

/// Generate a sonnet-sized corpus of 14-line documents.
fn generate_test_corpus(count: usize) -> Vec<Document> {
    let words = [
        "love", "thee", "thou", "beauty", "time", "summer", "fair", "eyes", "heart", "death",
        "fool", "night", "day", "sweet", "youth", "praise", "truth", "rose", "art", "doth",
    ];

    (0..count)
        .map(|i| {
            let lines = (0..14).map(|j| {
                (0..8)
                    .map(|k| words[(i * 7 + j * 13 + k * 3) % words.len()])
                    .collect::<Vec<_>>()
                    .join(" ")
            });
            Document::new(format!("Sonnet {}", i + 1), lines)
        })
        .collect()
}

/// Benchmark span discovery and single-document search.
fn bench_span_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("span_discovery");

    let corpus = generate_test_corpus(1);
    let line = corpus[0].lines[0].to_lowercase();

    group.bench_function("find_spans_line", |b| {
        b.iter(|| black_box(find_spans(black_box(&line), black_box("th"))))
    });

    group.bench_function("search_document", |b| {
        b.iter(|| black_box(search_document(black_box(&corpus[0]), black_box("love"))))
    });

    group.finish();
}

/// Benchmark whole-corpus evaluation.
fn bench_query_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_evaluation");

    let engine = QueryEngine::new(generate_test_corpus(154));
    let single: &[&str] = &["love"];
    let three: &[&str] = &["love", "thee", "fair"];
    group.throughput(Throughput::Elements(engine.len() as u64));

    group.bench_function("single_term", |b| {
        b.iter(|| black_box(engine.evaluate(black_box(single), SearchMode::Or)))
    });

    for mode in [SearchMode::And, SearchMode::Or] {
        group.bench_function(format!("three_terms_{mode}"), |b| {
            b.iter(|| black_box(engine.evaluate(black_box(three), mode)))
        });
    }

    group.bench_function("three_terms_parallel", |b| {
        b.iter(|| black_box(engine.evaluate_parallel(black_box(three), SearchMode::Or)))
    });

    group.finish();
}

/// Benchmark highlight rendering of matched lines.
fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");

    let engine = QueryEngine::new(generate_test_corpus(154));
    let results = engine.evaluate(&["th", "e"], SearchMode::Or);
    let highlighter = Highlighter::default();

    group.bench_function("render_all_matches", |b| {
        b.iter(|| {
            for result in results.iter().filter(|r| r.is_match()) {
                for lm in &result.line_matches {
                    black_box(highlighter.highlight(&lm.text, &lm.spans));
                }
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_span_discovery,
    bench_query_evaluation,
    bench_highlight
);
criterion_main!(benches);
