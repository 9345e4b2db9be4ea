//! Error types for the Stanza library.
//!
//! The query engine itself cannot fail: it works on already loaded, in-memory
//! documents. Errors come from the edges of the system, namely corpus loading,
//! configuration files and the command line. All of them are represented by
//! the [`StanzaError`] enum.
//!
//! # Examples
//!
//! ```
//! use stanza::error::{StanzaError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(StanzaError::corpus("expected a list of poems"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Stanza operations.
#[derive(Error, Debug)]
pub enum StanzaError {
    /// I/O errors (cache file, config file, terminal)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The corpus is malformed (not a list, entries without title or lines)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration could not be read or written
    #[error("Config error: {0}")]
    Config(String),

    /// Downloading the corpus failed
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Invalid command line or REPL command
    #[error("Command error: {0}")]
    Command(String),
}

/// Result type alias for operations that may fail with StanzaError.
pub type Result<T> = std::result::Result<T, StanzaError>;

impl StanzaError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        StanzaError::Corpus(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StanzaError::Config(msg.into())
    }

    /// Create a new fetch error.
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        StanzaError::Fetch(msg.into())
    }

    /// Create a new command error.
    pub fn command<S: Into<String>>(msg: S) -> Self {
        StanzaError::Command(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = StanzaError::corpus("missing title");
        assert_eq!(error.to_string(), "Corpus error: missing title");

        let error = StanzaError::config("read-only file");
        assert_eq!(error.to_string(), "Config error: read-only file");

        let error = StanzaError::command("Usage: :highlight on|off");
        assert_eq!(error.to_string(), "Command error: Usage: :highlight on|off");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stanza_error = StanzaError::from(io_error);

        match stanza_error {
            StanzaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(StanzaError::from(json_error), StanzaError::Json(_)));
    }
}
