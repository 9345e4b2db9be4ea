//! # Stanza
//!
//! Literal substring search over a small, fixed corpus of poems.
//!
//! ## Features
//!
//! - Case-insensitive substring matching in titles and lines, overlapping
//!   occurrences included
//! - Multi-word queries combined with AND or OR
//! - Inline highlighting of matches
//! - Corpus download with an on-disk cache, persisted user settings
//!
//! There is no index: every query is a linear scan of the corpus.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod highlight;
pub mod query;

pub mod prelude {
    pub use crate::config::Configuration;
    pub use crate::document::Document;
    pub use crate::error::{Result, StanzaError};
    pub use crate::highlight::{HighlightConfig, Highlighter};
    pub use crate::query::{LineMatch, QueryEngine, SearchMode, SearchResult, Span};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
