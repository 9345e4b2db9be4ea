//! Corpus acquisition with an on-disk cache.
//!
//! The corpus is a JSON array of `{title, lines}` records, the shape served by
//! PoetryDB. [`CorpusLoader`] reads it from a cache file when one exists and
//! otherwise downloads it (with the `fetch` feature) and caches the payload,
//! pretty-printed but with every field PoetryDB sent.
//!
//! Malformed input fails fast: a root that is not an array, or any entry
//! without a string `title` and a list of string `lines`, rejects the whole
//! corpus.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::info;
use serde::Deserialize;
use serde_json::Value;

use crate::document::Document;
use crate::error::{Result, StanzaError};

/// Shakespeare's sonnets on PoetryDB.
pub const POETRYDB_URL: &str = "https://poetrydb.org/author,title/Shakespeare;Sonnet";

/// Default cache file name.
pub const CACHE_FILE_NAME: &str = "sonnets.json";

/// Parse a corpus from JSON text.
///
/// ```
/// use stanza::corpus::parse_corpus;
///
/// let docs = parse_corpus(r#"[{"title": "T", "lines": ["a", "b"]}]"#).unwrap();
/// assert_eq!(docs[0].lines.len(), 2);
///
/// assert!(parse_corpus(r#"{"status": 404}"#).is_err());
/// ```
pub fn parse_corpus(json: &str) -> Result<Vec<Document>> {
    documents_from_value(&serde_json::from_str(json)?)
}

/// Extract documents from an already parsed JSON payload.
fn documents_from_value(value: &Value) -> Result<Vec<Document>> {
    let Value::Array(entries) = value else {
        return Err(StanzaError::corpus("expected a list of poems"));
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            Document::deserialize(entry)
                .map_err(|e| StanzaError::corpus(format!("poem {}: {e}", idx + 1)))
        })
        .collect()
}

/// Where a loaded corpus came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusSource {
    /// Read from the cache file.
    Cache,
    /// Downloaded and written to the cache file.
    Remote,
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusSource::Cache => f.write_str("cache"),
            CorpusSource::Remote => f.write_str("PoetryDB"),
        }
    }
}

/// A corpus together with how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    /// The documents in corpus order.
    pub documents: Vec<Document>,
    /// Cache hit or download.
    pub source: CorpusSource,
    /// Time spent loading.
    pub elapsed: Duration,
}

/// Loads the corpus from a cache file, downloading it on a cache miss.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    cache_path: PathBuf,
    url: String,
}

impl CorpusLoader {
    /// Create a loader using `cache_path` and the default PoetryDB URL.
    pub fn new<P: Into<PathBuf>>(cache_path: P) -> Self {
        CorpusLoader {
            cache_path: cache_path.into(),
            url: POETRYDB_URL.to_string(),
        }
    }

    /// Use a different download URL.
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = url.into();
        self
    }

    /// The cache file.
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// The download URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Load from cache or download.
    pub fn load(&self) -> Result<LoadedCorpus> {
        let start = Instant::now();

        let (documents, source) = if self.cache_path.exists() {
            let json = fs::read_to_string(&self.cache_path)?;
            (parse_corpus(&json)?, CorpusSource::Cache)
        } else {
            (self.store_payload(&self.fetch()?)?, CorpusSource::Remote)
        };

        let elapsed = start.elapsed();
        info!(
            "Loaded {} poems from {} in {:?}",
            documents.len(),
            source,
            elapsed
        );

        Ok(LoadedCorpus {
            documents,
            source,
            elapsed,
        })
    }

    /// Validate a downloaded payload and cache it with every field intact.
    fn store_payload(&self, json: &str) -> Result<Vec<Document>> {
        let payload: Value = serde_json::from_str(json)?;
        let documents = documents_from_value(&payload)?;

        if let Some(parent) = self.cache_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.cache_path, serde_json::to_string_pretty(&payload)?)?;
        Ok(documents)
    }

    #[cfg(feature = "fetch")]
    fn fetch(&self) -> Result<String> {
        info!("Downloading corpus from {}", self.url);
        let response = reqwest::blocking::get(&self.url)
            .and_then(|response| response.error_for_status())
            .map_err(|e| StanzaError::fetch(format!("{}: {e}", self.url)))?;
        response
            .text()
            .map_err(|e| StanzaError::fetch(format!("{}: {e}", self.url)))
    }

    #[cfg(not(feature = "fetch"))]
    fn fetch(&self) -> Result<String> {
        Err(StanzaError::fetch(format!(
            "{} not found and downloading is disabled (build with the `fetch` feature)",
            self.cache_path.display()
        )))
    }
}
