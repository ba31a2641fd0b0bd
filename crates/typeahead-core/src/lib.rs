//! Typeahead Core Library
//!
//! Document model, widget configuration, interaction state machine, and the
//! suggestion view-model for the typeahead search widget.
//!
//! Everything in this crate is DOM-free: the document store and the
//! interaction controller are plain data structures that the browser
//! adapters (`typeahead-ui`, `typeahead-wasm`) drive from real events.

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod view;

pub use config::WidgetConfig;
pub use controller::{Command, Controller, Key, WidgetEvent, WidgetState};
pub use document::{Document, DocumentRecord, DocumentStore, FieldKind};
pub use error::{CoreError, Result};
pub use view::{SuggestionView, resolve_suggestions, suggestion_view};
