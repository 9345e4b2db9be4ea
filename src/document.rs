//! Poem documents.
//!
//! A [`Document`] is a title plus an ordered list of lines. Line positions are
//! 1-based wherever they are reported. Documents are loaded once (see
//! [`crate::corpus`]) and never mutated by the query engine.
//!
//! # Examples
//!
//! ```
//! use stanza::document::Document;
//!
//! let doc = Document::builder()
//!     .title("Sonnet 18")
//!     .add_line("Shall I compare thee to a summer's day?")
//!     .add_line("Thou art more lovely and more temperate:")
//!     .build();
//!
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.line(1), Some("Shall I compare thee to a summer's day?"));
//! ```

use serde::{Deserialize, Serialize};

/// A single poem: a title and its lines.
///
/// Deserializes from the PoetryDB record shape; unknown keys such as
/// `author` or `linecount` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The poem title.
    pub title: String,
    /// The poem lines in order.
    pub lines: Vec<String>,
}

impl Document {
    /// Create a document from a title and lines.
    pub fn new<T, I, L>(title: T, lines: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Document {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Get a line by its 1-based position.
    pub fn line(&self, line_no: usize) -> Option<&str> {
        line_no
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// Iterate over `(line_no, line)` pairs with 1-based numbering.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Create a builder for constructing documents.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }
}

/// Builder for creating documents.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        DocumentBuilder::default()
    }

    /// Set the title.
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.document.title = title.into();
        self
    }

    /// Append a line.
    pub fn add_line<S: Into<String>>(mut self, line: S) -> Self {
        self.document.lines.push(line.into());
        self
    }

    /// Build the document.
    pub fn build(self) -> Document {
        self.document
    }
}
