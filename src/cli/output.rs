//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::highlight::Highlighter;
use crate::query::{QueryOutcome, SearchResult, Span};

/// Result structure for a query in JSON output.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    pub query: &'a str,
    pub total_documents: usize,
    pub matched_documents: usize,
    pub duration_ms: f64,
    pub results: Vec<&'a SearchResult>,
}

impl<'a> SearchReport<'a> {
    /// Summarize an outcome, keeping only matched documents.
    pub fn new(outcome: &'a QueryOutcome) -> Self {
        let results: Vec<&SearchResult> = outcome.matched().collect();
        SearchReport {
            query: &outcome.query,
            total_documents: outcome.total_documents(),
            matched_documents: results.len(),
            duration_ms: outcome.elapsed_ms(),
            results,
        }
    }
}

/// Write an outcome in the requested format.
pub fn output_outcome<W: Write>(
    out: &mut W,
    outcome: &QueryOutcome,
    format: OutputFormat,
    highlighter: Option<&Highlighter>,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_outcome(out, outcome, highlighter),
        OutputFormat::Json => write_json(out, &SearchReport::new(outcome), pretty),
    }
}

/// Write matched documents in human-readable form.
///
/// Highlighting is applied when a highlighter is given.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &QueryOutcome,
    highlighter: Option<&Highlighter>,
) -> Result<()> {
    let total = outcome.total_documents();
    writeln!(
        out,
        "{} out of {} sonnets contain \"{}\". Your query took {:.2}ms.",
        outcome.matched_count(),
        total,
        outcome.query,
        outcome.elapsed_ms()
    )?;

    let render = |text: &str, spans: &[Span]| match highlighter {
        Some(h) => h.highlight(text, spans),
        None => text.to_string(),
    };

    for (idx, result) in outcome.matched().enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "[{}/{}] {}",
            idx + 1,
            total,
            render(&result.title, &result.title_spans)
        )?;
        for lm in &result.line_matches {
            writeln!(out, "  [{:2}] {}", lm.line_no, render(&lm.text, &lm.spans))?;
        }
    }

    Ok(())
}

/// Write any serializable value as JSON.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
