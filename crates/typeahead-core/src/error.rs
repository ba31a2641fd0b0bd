//! Error types for the typeahead core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for the typeahead widget.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration validation error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Document feed rejected at store construction.
    #[error("Document feed error: {message}")]
    Feed { message: String },

    /// A ranked id did not resolve to a stored document.
    #[error("Unknown document id {id}")]
    UnknownDocument { id: u32 },

    /// Search index error.
    #[error("Search error: {0}")]
    Search(String),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new document feed error.
    pub fn feed(message: impl Into<String>) -> Self {
        Self::Feed {
            message: message.into(),
        }
    }

    /// Create a new search error.
    pub fn search(message: impl Into<String>) -> Self {
        Self::Search(message.into())
    }
}
