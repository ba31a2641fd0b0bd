//! Document model and the in-memory document store.
//!
//! Documents arrive as a literal JSON array produced by the site build; the
//! store does a single normalization pass over that feed and is immutable
//! for the rest of the page session.

use serde::{Deserialize, Serialize};

/// One searchable attribute of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Page title.
    Title,
    /// Page description/summary.
    Description,
    /// Rendered page content.
    Content,
    /// Page tags.
    Tags,
}

impl FieldKind {
    /// All indexable fields, in index order.
    pub const ALL: [FieldKind; 4] = [Self::Title, Self::Description, Self::Content, Self::Tags];

    /// Resolve a field from its feed name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "title" => Some(Self::Title),
            "description" => Some(Self::Description),
            "content" => Some(Self::Content),
            "tags" => Some(Self::Tags),
            _ => None,
        }
    }

    /// Get the feed name for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Content => "content",
            Self::Tags => "tags",
        }
    }
}

/// Raw document record as serialized by the external site build.
///
/// Only `id` is required; generated pages may miss any of the metadata
/// fields. The store normalizes `tags`, everything else passes through and
/// simply renders as empty text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Stable 0-based document id assigned at build time.
    pub id: u32,

    /// Navigation target.
    #[serde(default)]
    pub href: String,

    /// Page title.
    #[serde(default)]
    pub title: String,

    /// Page description.
    #[serde(default)]
    pub description: String,

    /// Rendered page content.
    #[serde(default)]
    pub content: String,

    /// Page tags; absent for pages without tag metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A normalized, immutable site page document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Stable 0-based document id, unique for the session.
    pub id: u32,

    /// Navigation target.
    pub href: String,

    /// Page title.
    pub title: String,

    /// Page description.
    pub description: String,

    /// Rendered page content.
    pub content: String,

    /// Page tags (empty when the feed had none).
    pub tags: Vec<String>,
}

impl Document {
    /// Text of one field, with tags joined for tokenization.
    pub fn field_text(&self, field: FieldKind) -> String {
        match field {
            FieldKind::Title => self.title.clone(),
            FieldKind::Description => self.description.clone(),
            FieldKind::Content => self.content.clone(),
            FieldKind::Tags => self.tags.join(" "),
        }
    }
}

/// The fixed, ordered collection of searchable documents.
///
/// Built once from the external feed at page load and never mutated.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    docs: Vec<Document>,
}

impl DocumentStore {
    /// Build the store from the raw feed, normalizing missing `tags` to an
    /// empty list. No other validation happens here.
    pub fn from_records(records: Vec<DocumentRecord>) -> Self {
        let docs = records
            .into_iter()
            .map(|r| Document {
                id: r.id,
                href: r.href,
                title: r.title,
                description: r.description,
                content: r.content,
                tags: r.tags.unwrap_or_default(),
            })
            .collect();

        Self { docs }
    }

    /// All documents in feed order.
    pub fn all(&self) -> &[Document] {
        &self.docs
    }

    /// Look up a document by id.
    ///
    /// Ids are assigned 0-based at build time, so positional lookup is
    /// attempted first; the id check guards against feeds that skip ids.
    /// Feeds with non-contiguous ids degrade to the linear scan.
    pub fn get(&self, id: u32) -> Option<&Document> {
        self.docs
            .get(id as usize)
            .filter(|d| d.id == id)
            .or_else(|| self.docs.iter().find(|d| d.id == id))
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str, tags: Option<Vec<&str>>) -> DocumentRecord {
        DocumentRecord {
            id,
            href: format!("/posts/{id}"),
            title: title.to_string(),
            description: format!("About {title}"),
            content: String::new(),
            tags: tags.map(|t| t.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn test_field_kind_names() {
        for field in FieldKind::ALL {
            assert_eq!(FieldKind::from_name(field.as_str()), Some(field));
        }
        assert_eq!(FieldKind::from_name("Category"), None);
    }

    #[test]
    fn test_missing_tags_normalized_to_empty() {
        let store = DocumentStore::from_records(vec![
            record(0, "With tags", Some(vec!["anime"])),
            record(1, "Without tags", None),
        ]);

        assert_eq!(store.all()[0].tags, vec!["anime".to_string()]);
        assert!(store.all()[1].tags.is_empty());
    }

    #[test]
    fn test_malformed_entries_pass_through() {
        // Missing href/title are not validated; they stay empty.
        let store = DocumentStore::from_records(vec![DocumentRecord {
            id: 0,
            href: String::new(),
            title: String::new(),
            description: String::new(),
            content: String::new(),
            tags: None,
        }]);

        let doc = store.get(0).unwrap();
        assert!(doc.href.is_empty());
        assert!(doc.title.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let store = DocumentStore::from_records(vec![
            record(0, "First", None),
            record(1, "Second", None),
        ]);

        assert_eq!(store.get(1).unwrap().title, "Second");
        assert!(store.get(7).is_none());
    }

    #[test]
    fn test_get_with_non_contiguous_ids() {
        let store = DocumentStore::from_records(vec![record(3, "Odd feed", None)]);
        assert_eq!(store.get(3).unwrap().title, "Odd feed");
        assert!(store.get(0).is_none());
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let record: DocumentRecord = serde_json::from_str(r#"{"id": 2}"#).unwrap();
        assert_eq!(record.id, 2);
        assert!(record.href.is_empty());
        assert!(record.tags.is_none());
    }

    #[test]
    fn test_tags_field_text_joins() {
        let store = DocumentStore::from_records(vec![record(0, "T", Some(vec!["ghibli", "film"]))]);
        assert_eq!(store.get(0).unwrap().field_text(FieldKind::Tags), "ghibli film");
    }
}
