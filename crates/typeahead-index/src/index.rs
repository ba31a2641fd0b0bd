//! Multi-field prefix index construction.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::info;
use typeahead_core::{DocumentStore, FieldKind, WidgetConfig};

use crate::{
    IndexError, Result,
    tokenize::{clip, tokenize},
};

/// Inverted index for one field: term -> sorted, deduplicated posting list.
///
/// Terms live in a `BTreeMap` so prefix lookup is an ordered range scan
/// starting at the query term.
#[derive(Debug, Clone, Default)]
pub struct FieldIndex {
    terms: BTreeMap<String, Vec<u32>>,
}

impl FieldIndex {
    fn insert(&mut self, term: String, id: u32) {
        self.terms.entry(term).or_default().push(id);
    }

    fn finish(&mut self) {
        for postings in self.terms.values_mut() {
            postings.sort_unstable();
            postings.dedup();
        }
    }

    /// Ids of documents with at least one token starting with `prefix`.
    /// The result is sorted and deduplicated.
    pub fn matching(&self, prefix: &str) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .terms
            .range(prefix.to_string()..)
            .take_while(|(term, _)| term.starts_with(prefix))
            .flat_map(|(_, postings)| postings.iter().copied())
            .collect();

        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

/// The read-only multi-field index.
///
/// Built exactly once at startup and never rebuilt; queries only read.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    fields: HashMap<FieldKind, FieldIndex>,
    resolution: usize,
    doc_count: usize,
}

impl SearchIndex {
    /// Build the index from the store, one field index per configured field.
    ///
    /// Fails on an invalid configuration or a duplicate document id. Index
    /// construction failure is fatal for the search feature only; callers
    /// degrade to "no suggestions" rather than taking the page down.
    pub fn build(store: &DocumentStore, config: &WidgetConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| IndexError::Config(e.to_string()))?;

        let mut fields: HashMap<FieldKind, FieldIndex> = config
            .fields
            .iter()
            .map(|&field| (field, FieldIndex::default()))
            .collect();

        let mut seen = HashSet::with_capacity(store.len());
        for doc in store.all() {
            if !seen.insert(doc.id) {
                return Err(IndexError::DuplicateId(doc.id));
            }

            for &field in &config.fields {
                let field_index = fields
                    .get_mut(&field)
                    .ok_or_else(|| IndexError::Config(format!("field {} not indexed", field.as_str())))?;
                for token in tokenize(&doc.field_text(field)) {
                    field_index.insert(clip(&token, config.resolution).to_string(), doc.id);
                }
            }
        }

        for field_index in fields.values_mut() {
            field_index.finish();
        }

        info!(
            documents = store.len(),
            fields = fields.len(),
            resolution = config.resolution,
            "Built typeahead index"
        );

        Ok(Self {
            fields,
            resolution: config.resolution,
            doc_count: store.len(),
        })
    }

    /// Ids of documents whose `field` matches every query term as a prefix,
    /// sorted ascending. Match order carries no meaning downstream; only
    /// membership feeds the tally.
    pub fn field_matches(&self, field: FieldKind, terms: &[String]) -> Vec<u32> {
        let Some(field_index) = self.fields.get(&field) else {
            return Vec::new();
        };

        let mut result: Option<Vec<u32>> = None;
        for term in terms {
            let matched = field_index.matching(clip(term, self.resolution));
            result = Some(match result {
                None => matched,
                Some(mut acc) => {
                    acc.retain(|id| matched.binary_search(id).is_ok());
                    acc
                }
            });
            if result.as_ref().is_some_and(Vec::is_empty) {
                return Vec::new();
            }
        }

        result.unwrap_or_default()
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.doc_count
    }

    /// Number of distinct terms in one field's index.
    pub fn term_count(&self, field: FieldKind) -> usize {
        self.fields.get(&field).map_or(0, FieldIndex::term_count)
    }
}
