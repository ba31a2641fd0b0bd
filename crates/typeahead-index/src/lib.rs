//! Typeahead Index Library
//!
//! Multi-field prefix-tokenized indexing and ranked retrieval for the
//! typeahead widget.
//!
//! # Pipeline
//!
//! - [`SearchIndex::build`] — one synchronous pass over the document store
//!   at startup, one inverted index per configured field
//! - [`QueryEngine::search`] — per-keystroke retrieval returning per-field
//!   [`QueryHit`]s
//! - [`rank`] — cross-field hit aggregation: a document's rank is the
//!   number of fields it matched in
//!
//! # Example
//!
//! ```
//! use typeahead_core::{DocumentRecord, DocumentStore, WidgetConfig};
//! use typeahead_index::{QueryEngine, SearchOptions, rank};
//!
//! let store = DocumentStore::from_records(vec![DocumentRecord {
//!     id: 0,
//!     href: "/posts/totoro".into(),
//!     title: "Totoro Guide".into(),
//!     description: String::new(),
//!     content: String::new(),
//!     tags: Some(vec!["anime".into()]),
//! }]);
//!
//! let config = WidgetConfig::default();
//! let mut engine = QueryEngine::build(&store, &config).unwrap();
//! let hits = engine.search("toto", &SearchOptions::from_config(&config));
//! let ranked = rank(&hits);
//! assert_eq!(ranked[0].id, 0);
//! ```

pub mod index;
pub mod query;
pub mod tokenize;

pub use index::{FieldIndex, SearchIndex};
pub use query::{QueryEngine, QueryHit, RankedDoc, SearchOptions, rank};
pub use tokenize::tokenize;
use thiserror::Error;

/// Index construction and query errors.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The document feed reused an id.
    #[error("duplicate document id {0}")]
    DuplicateId(u32),

    /// The widget configuration failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;
