//! User preferences and their persistence.
//!
//! A [`Configuration`] holds two settings: whether matches are highlighted
//! and how multiple query terms are combined. [`ConfigStore`] loads it from
//! and saves it to a JSON file. Loading never fails: a missing, unreadable or
//! invalid file yields the defaults, and invalid individual entries are
//! ignored.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use stanza::config::Configuration;
//! use stanza::query::SearchMode;
//!
//! let mut config = Configuration::default();
//! config.update(&json!({"highlight": false, "search_mode": "XOR"}));
//!
//! assert!(!config.highlight);
//! assert_eq!(config.search_mode, SearchMode::And);
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StanzaError};
use crate::query::engine::SearchMode;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings used when nothing else is configured.
pub const DEFAULT_CONFIGURATION: Configuration = Configuration {
    highlight: true,
    search_mode: SearchMode::And,
};

/// User preferences for the search tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Whether matches are highlighted in the output.
    pub highlight: bool,
    /// How multiple query terms are combined.
    pub search_mode: SearchMode,
}

impl Default for Configuration {
    fn default() -> Self {
        DEFAULT_CONFIGURATION
    }
}

impl Configuration {
    /// Merge settings from a loaded JSON object.
    ///
    /// `highlight` is taken only if it is a boolean and `search_mode` only if
    /// it is exactly `"AND"` or `"OR"`. Anything else is ignored.
    pub fn update(&mut self, other: &Value) {
        if let Some(highlight) = other.get("highlight").and_then(Value::as_bool) {
            self.highlight = highlight;
        }

        match other.get("search_mode").and_then(Value::as_str) {
            Some("AND") => self.search_mode = SearchMode::And,
            Some("OR") => self.search_mode = SearchMode::Or,
            _ => {}
        }
    }

    /// Defaults merged with a loaded JSON object.
    pub fn from_value(value: &Value) -> Self {
        let mut config = Configuration::default();
        config.update(value);
        config
    }
}

/// Reads and writes a [`Configuration`] as a JSON file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store backed by `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ConfigStore { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, falling back to defaults on any problem.
    pub fn load(&self) -> Configuration {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No {} found. Using default configuration.", self.path.display());
                return Configuration::default();
            }
            Err(e) => {
                warn!(
                    "Could not read {}: {e}. Using default configuration.",
                    self.path.display()
                );
                return Configuration::default();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(value) => Configuration::from_value(&value),
            Err(e) => {
                warn!(
                    "{} is invalid: {e}. Using default configuration.",
                    self.path.display()
                );
                Configuration::default()
            }
        }
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, config: &Configuration) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json).map_err(|e| {
            StanzaError::config(format!("Writing {} failed: {e}", self.path.display()))
        })
    }
}
