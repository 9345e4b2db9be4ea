//! Query evaluation: span discovery, per-document search and term combination.

pub mod engine;
pub mod parser;
pub mod result;
pub mod searcher;
pub mod span;

pub use engine::{QueryEngine, QueryOutcome, SearchMode};
pub use parser::parse_terms;
pub use result::{LineMatch, SearchResult};
pub use searcher::search_document;
pub use span::{Span, find_spans, merge_spans};
