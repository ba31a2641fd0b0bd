//! Suggestion view-model.
//!
//! Pure mapping from ranked document ids to the data the rendering sinks
//! display, decoupled from any DOM so it can be tested directly.

use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentStore};

/// What one rendered suggestion entry shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionView {
    /// Anchor target.
    pub href: String,

    /// Title span text.
    pub title: String,

    /// Description span text.
    pub description: String,
}

/// Map a document to its suggestion view.
pub fn suggestion_view(doc: &Document) -> SuggestionView {
    SuggestionView {
        href: doc.href.clone(),
        title: doc.title.clone(),
        description: doc.description.clone(),
    }
}

/// Resolve ranked document ids into suggestion views, in rank order.
///
/// The stop check fires after an entry is appended, so up to `limit + 1`
/// views can come back. That reproduces the original widget's rendering
/// boundary, which downstream tests pin deliberately.
///
/// An id that does not resolve signals an index/store desynchronization
/// bug: it is logged and skipped, never rendered as a blank entry.
pub fn resolve_suggestions(
    store: &DocumentStore,
    ranked_ids: impl IntoIterator<Item = u32>,
    limit: usize,
) -> Vec<SuggestionView> {
    let mut views = Vec::new();

    for id in ranked_ids {
        let Some(doc) = store.get(id) else {
            tracing::error!(id, "ranked document id missing from store");
            continue;
        };

        views.push(suggestion_view(doc));
        if views.len() > limit {
            break;
        }
    }

    views
}
