//! Query string parsing.
//!
//! Queries are plain whitespace-separated words; there is no operator syntax.
//! How the words combine is decided by the configured
//! [`SearchMode`](crate::query::engine::SearchMode).

/// Split a raw query into its terms.
///
/// ```
/// use stanza::query::parser::parse_terms;
///
/// assert_eq!(parse_terms("  love\tfool  "), vec!["love", "fool"]);
/// assert!(parse_terms("   ").is_empty());
/// ```
pub fn parse_terms(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}
