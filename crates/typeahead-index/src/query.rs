//! Query execution, hit aggregation, and ranking.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use typeahead_core::{DocumentStore, FieldKind, WidgetConfig};

use crate::{Result, index::SearchIndex, tokenize::tokenize};

/// Options for one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fields to search, in hit emission order.
    pub fields: Vec<FieldKind>,

    /// Per-field cap on matched ids, applied before aggregation. Distinct
    /// documents after cross-field aggregation can therefore reach
    /// `fields.len() * limit`.
    pub limit: usize,

    /// Per-field number of matched ids to skip before the cap.
    pub offset: usize,
}

impl SearchOptions {
    /// Derive options from the widget configuration.
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            fields: config.fields.clone(),
            limit: config.result_count,
            offset: 0,
        }
    }
}

/// Matches of one field for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryHit {
    /// The field that matched.
    pub field: FieldKind,

    /// Matching document ids. Only membership matters downstream.
    pub ids: Vec<u32>,
}

/// One aggregated, ranked document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedDoc {
    /// Document id.
    pub id: u32,

    /// Number of fields the document matched in.
    pub hits: u32,
}

/// Aggregate per-field hits into a ranked document list.
///
/// Each document's tally is the number of fields it appeared in, not how
/// many tokens matched inside a field. Sort is tally descending; ties break
/// by ascending id, which is document store order, so equal-tally output is
/// deterministic.
pub fn rank(hits: &[QueryHit]) -> Vec<RankedDoc> {
    let mut tally: HashMap<u32, u32> = HashMap::new();
    for hit in hits {
        for &id in &hit.ids {
            *tally.entry(id).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<RankedDoc> = tally
        .into_iter()
        .map(|(id, hits)| RankedDoc { id, hits })
        .collect();
    ranked.sort_unstable_by(|a, b| b.hits.cmp(&a.hits).then(a.id.cmp(&b.id)));
    ranked
}

/// The per-keystroke query engine.
///
/// Owns the read-only [`SearchIndex`] plus a small bounded query cache. The
/// cache is a tuning input only: cached and uncached searches agree.
#[derive(Debug)]
pub struct QueryEngine {
    index: SearchIndex,
    cache: QueryCache,
}

impl QueryEngine {
    /// Wrap a built index.
    pub fn new(index: SearchIndex, cache_entries: usize) -> Self {
        Self {
            index,
            cache: QueryCache::new(cache_entries),
        }
    }

    /// Build index and engine from the store in one step.
    pub fn build(store: &DocumentStore, config: &WidgetConfig) -> Result<Self> {
        Ok(Self::new(
            SearchIndex::build(store, config)?,
            config.cache_entries,
        ))
    }

    /// Search every configured field independently.
    ///
    /// Empty or whitespace-only input returns the empty vector, so the
    /// renderer cannot distinguish a cleared query from zero matches.
    /// Fields without matches emit no hit. Fully synchronous; rerun in full
    /// on every qualifying input event.
    pub fn search(&mut self, query: &str, options: &SearchOptions) -> Vec<QueryHit> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let key = cache_key(&terms, options);
        if let Some(hits) = self.cache.get(&key) {
            return hits;
        }

        let mut hits = Vec::new();
        for &field in &options.fields {
            let ids: Vec<u32> = self
                .index
                .field_matches(field, &terms)
                .into_iter()
                .skip(options.offset)
                .take(options.limit)
                .collect();

            if !ids.is_empty() {
                hits.push(QueryHit { field, ids });
            }
        }

        self.cache.insert(key, hits.clone());
        hits
    }

    /// The underlying index.
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }
}

fn cache_key(terms: &[String], options: &SearchOptions) -> String {
    let fields: Vec<&str> = options.fields.iter().map(FieldKind::as_str).collect();
    format!(
        "{}|{}|{}|{}",
        terms.join(" "),
        fields.join(","),
        options.limit,
        options.offset
    )
}

/// Bounded FIFO memo of recent hit lists.
#[derive(Debug)]
struct QueryCache {
    capacity: usize,
    entries: HashMap<String, Vec<QueryHit>>,
    order: VecDeque<String>,
}

impl QueryCache {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&self, key: &str) -> Option<Vec<QueryHit>> {
        self.entries.get(key).cloned()
    }

    fn insert(&mut self, key: String, hits: Vec<QueryHit>) {
        if self.capacity == 0 || self.entries.contains_key(&key) {
            return;
        }
        if self.entries.len() == self.capacity
            && let Some(oldest) = self.order.pop_front()
        {
            self.entries.remove(&oldest);
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, hits);
    }
}

#[cfg(test)]
mod tests {
    use typeahead_core::DocumentRecord;

    use super::*;

    fn record(
        id: u32,
        title: &str,
        description: &str,
        content: &str,
        tags: &[&str],
    ) -> DocumentRecord {
        DocumentRecord {
            id,
            href: format!("/posts/{id}"),
            title: title.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        }
    }

    fn engine(records: Vec<DocumentRecord>, config: &WidgetConfig) -> QueryEngine {
        let store = DocumentStore::from_records(records);
        QueryEngine::build(&store, config).unwrap()
    }

    #[test]
    fn test_empty_and_whitespace_queries_yield_no_hits() {
        let config = WidgetConfig::default();
        let mut engine = engine(vec![record(0, "Totoro", "", "", &[])], &config);
        let options = SearchOptions::from_config(&config);

        assert!(engine.search("", &options).is_empty());
        assert!(engine.search("   ", &options).is_empty());
        assert!(engine.search("\t\n", &options).is_empty());
    }

    #[test]
    fn test_hits_grouped_per_field() {
        let config = WidgetConfig::default();
        let mut engine = engine(
            vec![
                record(0, "Totoro Guide", "", "", &["anime"]),
                record(1, "Cooking", "", "", &["totoro"]),
            ],
            &config,
        );

        let hits = engine.search("totoro", &SearchOptions::from_config(&config));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], QueryHit { field: FieldKind::Title, ids: vec![0] });
        assert_eq!(hits[1], QueryHit { field: FieldKind::Tags, ids: vec![1] });
    }

    #[test]
    fn test_field_count_ranking() {
        let config = WidgetConfig::default();
        let mut engine = engine(
            vec![
                // Matches in content only.
                record(0, "Cooking", "", "ghibli films ranked", &[]),
                // Matches in title, description, and tags.
                record(1, "Ghibli Guide", "all ghibli movies", "", &["ghibli"]),
            ],
            &config,
        );

        let ranked = rank(&engine.search("ghibli", &SearchOptions::from_config(&config)));
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], RankedDoc { id: 1, hits: 3 });
        assert_eq!(ranked[1], RankedDoc { id: 0, hits: 1 });
    }

    #[test]
    fn test_equal_tally_ties_break_by_store_order() {
        let config = WidgetConfig::default();
        let mut engine = engine(
            vec![
                record(2, "Totoro Guide", "", "", &[]),
                record(5, "Totoro Recipes", "", "", &[]),
                record(7, "Totoro Trivia", "", "", &[]),
            ],
            &config,
        );

        let ranked = rank(&engine.search("totoro", &SearchOptions::from_config(&config)));
        let ids: Vec<u32> = ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 5, 7]);
    }

    #[test]
    fn test_per_field_limit_caps_before_aggregation() {
        let config = WidgetConfig {
            result_count: 2,
            ..WidgetConfig::default()
        };
        let records = (0..6)
            .map(|id| record(id, "Totoro", "", "", &[]))
            .collect();
        let mut engine = engine(records, &config);

        let hits = engine.search("totoro", &SearchOptions::from_config(&config));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].ids.len(), 2);
    }

    #[test]
    fn test_offset_skips_per_field_matches() {
        let config = WidgetConfig::default();
        let mut engine = engine(
            (0..4).map(|id| record(id, "Totoro", "", "", &[])).collect(),
            &config,
        );

        let options = SearchOptions {
            offset: 2,
            ..SearchOptions::from_config(&config)
        };
        assert_eq!(engine.search("totoro", &options)[0].ids, vec![2, 3]);
    }

    #[test]
    fn test_cache_is_transparent() {
        let config = WidgetConfig::default();
        let mut engine = engine(
            vec![record(0, "Totoro Guide", "", "", &["anime"])],
            &config,
        );
        let options = SearchOptions::from_config(&config);

        let first = engine.search("totoro", &options);
        let second = engine.search("totoro", &options);
        assert_eq!(first, second);

        // Disabled cache agrees too.
        let no_cache_config = WidgetConfig {
            cache_entries: 0,
            ..config.clone()
        };
        let store = DocumentStore::from_records(vec![record(
            0,
            "Totoro Guide",
            "",
            "",
            &["anime"],
        )]);
        let mut uncached = QueryEngine::build(&store, &no_cache_config).unwrap();
        assert_eq!(uncached.search("totoro", &options), first);
    }

    #[test]
    fn test_cache_evicts_oldest_beyond_capacity() {
        let config = WidgetConfig {
            cache_entries: 2,
            ..WidgetConfig::default()
        };
        let mut engine = engine(
            vec![record(0, "alpha beta gamma", "", "", &[])],
            &config,
        );
        let options = SearchOptions::from_config(&config);

        for query in ["alpha", "beta", "gamma", "alpha"] {
            let hits = engine.search(query, &options);
            assert_eq!(hits[0].ids, vec![0]);
        }
    }

    #[test]
    fn test_rank_on_no_hits() {
        assert!(rank(&[]).is_empty());
    }
}
