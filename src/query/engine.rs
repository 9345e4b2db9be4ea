//! Multi-term query evaluation over a whole corpus.
//!
//! Every query term is searched in every document, then the per-term results
//! are folded together document by document according to a [`SearchMode`].
//!
//! # AND gating
//!
//! Under [`SearchMode::And`] a document stays matched only while both its
//! accumulated result and the next term's result have a positive count. A
//! document that fails once has its count forced to zero and can never
//! recover, since the gate checks the accumulated count. Its spans and line
//! matches are left as they were; only the count is reset.
//!
//! # Examples
//!
//! ```
//! use stanza::document::Document;
//! use stanza::query::engine::{QueryEngine, SearchMode};
//!
//! let engine = QueryEngine::new(vec![
//!     Document::new("Test", ["a cat sat", "a bat ran"]),
//! ]);
//!
//! // "at" occurs twice on line 1 and once on line 2.
//! let results = engine.evaluate(&["at"], SearchMode::Or);
//! assert_eq!(results[0].matches, 3);
//!
//! // Gating is per document, not per line.
//! let results = engine.evaluate(&["at", "cat"], SearchMode::And);
//! assert_eq!(results[0].matches, 4);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::StanzaError;
use crate::query::parser::parse_terms;
use crate::query::result::SearchResult;
use crate::query::searcher::search_document;

/// How results of several query terms are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    /// Every term must match the document.
    #[default]
    #[serde(rename = "AND")]
    And,
    /// Any matching term contributes.
    #[serde(rename = "OR")]
    Or,
}

impl SearchMode {
    /// The canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::And => "AND",
            SearchMode::Or => "OR",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = StanzaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(SearchMode::And),
            "OR" => Ok(SearchMode::Or),
            _ => Err(StanzaError::command(format!(
                "Unknown search mode '{s}', expected AND or OR"
            ))),
        }
    }
}

/// Fold one more term's result into a document's accumulated result.
fn fold_term(accumulated: &mut SearchResult, next: &SearchResult, mode: SearchMode) {
    match mode {
        SearchMode::Or => *accumulated = accumulated.combine(next),
        SearchMode::And => {
            if accumulated.is_match() && next.is_match() {
                *accumulated = accumulated.combine(next);
            } else {
                accumulated.matches = 0;
            }
        }
    }
}

/// The results of one query together with how long evaluation took.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// The raw query as entered.
    pub query: String,
    /// One result per corpus document, in corpus order.
    pub results: Vec<SearchResult>,
    /// Wall-clock evaluation time.
    pub elapsed: Duration,
}

impl QueryOutcome {
    /// Results with a positive match count, in corpus order.
    pub fn matched(&self) -> impl Iterator<Item = &SearchResult> {
        self.results.iter().filter(|r| r.is_match())
    }

    /// Number of matched documents.
    pub fn matched_count(&self) -> usize {
        self.matched().count()
    }

    /// Number of documents searched.
    pub fn total_documents(&self) -> usize {
        self.results.len()
    }

    /// Evaluation time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Linear-scan query engine over an in-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    documents: Vec<Document>,
}

impl QueryEngine {
    /// Create an engine over the given documents.
    pub fn new(documents: Vec<Document>) -> Self {
        QueryEngine { documents }
    }

    /// The corpus, in order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Search every document for a single term.
    fn search_all(&self, term: &str) -> Vec<SearchResult> {
        self.documents
            .iter()
            .map(|doc| search_document(doc, term))
            .collect()
    }

    fn empty_results(&self) -> Vec<SearchResult> {
        self.documents
            .iter()
            .map(|doc| SearchResult::empty(doc.title.clone()))
            .collect()
    }

    /// Evaluate a list of terms, one term at a time across all documents.
    ///
    /// Returns one result per document in corpus order. Documents are never
    /// dropped; filter on [`SearchResult::is_match`] for display.
    pub fn evaluate<S: AsRef<str>>(&self, terms: &[S], mode: SearchMode) -> Vec<SearchResult> {
        let mut terms = terms.iter().map(|t| t.as_ref());
        let Some(first) = terms.next() else {
            return self.empty_results();
        };

        let mut combined = self.search_all(first);
        for term in terms {
            let results = self.search_all(term);
            for (accumulated, next) in combined.iter_mut().zip(&results) {
                fold_term(accumulated, next, mode);
            }
        }

        combined
    }

    /// Evaluate a list of terms with documents processed in parallel.
    ///
    /// Terms are still folded in order within each document, so the output
    /// is identical to [`QueryEngine::evaluate`].
    pub fn evaluate_parallel<S: AsRef<str> + Sync>(
        &self,
        terms: &[S],
        mode: SearchMode,
    ) -> Vec<SearchResult> {
        let Some((first, rest)) = terms.split_first() else {
            return self.empty_results();
        };

        self.documents
            .par_iter()
            .map(|doc| {
                let mut accumulated = search_document(doc, first.as_ref());
                for term in rest {
                    fold_term(&mut accumulated, &search_document(doc, term.as_ref()), mode);
                }
                accumulated
            })
            .collect()
    }

    /// Split a raw query on whitespace, evaluate it and time the evaluation.
    pub fn query(&self, raw: &str, mode: SearchMode) -> QueryOutcome {
        self.timed_query(raw, mode, false)
    }

    /// Like [`QueryEngine::query`], evaluating with
    /// [`QueryEngine::evaluate_parallel`].
    pub fn query_parallel(&self, raw: &str, mode: SearchMode) -> QueryOutcome {
        self.timed_query(raw, mode, true)
    }

    fn timed_query(&self, raw: &str, mode: SearchMode, parallel: bool) -> QueryOutcome {
        let terms = parse_terms(raw);

        let start = Instant::now();
        let results = if parallel {
            self.evaluate_parallel(&terms, mode)
        } else {
            self.evaluate(&terms, mode)
        };
        let elapsed = start.elapsed();

        debug!(
            "query {:?} ({} terms, {}, parallel: {}) over {} documents took {:?}",
            raw,
            terms.len(),
            mode,
            parallel,
            self.documents.len(),
            elapsed
        );

        QueryOutcome {
            query: raw.to_string(),
            results,
            elapsed,
        }
    }
}
