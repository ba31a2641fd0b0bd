//! The embeddable search widget.
//!
//! [`WidgetCore`] holds the whole pipeline (store, engine, controller) and
//! is plain Rust; [`SearchWidget`] is its `wasm-bindgen` wrapper plus the
//! feed loader.

use std::{cell::RefCell, rc::Rc};

use gloo_net::http::Request;
use typeahead_core::{
    Controller, DocumentRecord, DocumentStore, SuggestionView, WidgetConfig, resolve_suggestions,
};
use typeahead_index::{QueryEngine, SearchOptions, rank};
use wasm_bindgen::prelude::*;

/// The assembled search pipeline for one page session.
pub(crate) struct WidgetCore {
    store: DocumentStore,
    engine: QueryEngine,
    config: WidgetConfig,
    pub(crate) controller: Controller,
}

impl WidgetCore {
    /// Build the store and index from the raw feed. Runs exactly once; a
    /// failure here disables search for the session and nothing else.
    pub(crate) fn new(records: Vec<DocumentRecord>, config: WidgetConfig) -> Result<Self, String> {
        let store = DocumentStore::from_records(records);
        let engine = QueryEngine::build(&store, &config).map_err(|e| e.to_string())?;

        Ok(Self {
            store,
            engine,
            config,
            controller: Controller::new(),
        })
    }

    /// Full per-keystroke recomputation: search, aggregate, rank, resolve.
    pub(crate) fn suggest(&mut self, query: &str) -> Vec<SuggestionView> {
        let options = SearchOptions::from_config(&self.config);
        let hits = self.engine.search(query, &options);
        let ranked = rank(&hits);

        resolve_suggestions(
            &self.store,
            ranked.into_iter().map(|r| r.id),
            self.config.result_count,
        )
    }

    pub(crate) fn document_count(&self) -> usize {
        self.store.len()
    }
}

/// Search widget for static pages.
#[wasm_bindgen]
pub struct SearchWidget {
    core: Rc<RefCell<WidgetCore>>,
}

#[wasm_bindgen]
impl SearchWidget {
    /// Load the document feed from a URL and build the widget.
    #[wasm_bindgen(js_name = load)]
    pub async fn load(feed_url: &str) -> Result<SearchWidget, JsValue> {
        let response = Request::get(feed_url)
            .send()
            .await
            .map_err(|e| JsValue::from_str(&format!("Network error: {e}")))?;

        if !response.ok() {
            return Err(JsValue::from_str(&format!(
                "Failed to load document feed: HTTP {}",
                response.status()
            )));
        }

        let json = response
            .text()
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to read response: {e}")))?;

        Self::from_json(&json)
    }

    /// Build the widget from an in-page JSON document array.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(documents_json: &str) -> Result<SearchWidget, JsValue> {
        Self::with_config_json(documents_json, None)
    }

    /// Build the widget from a JSON document array and a JSON config.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config_json(
        documents_json: &str,
        config_json: Option<String>,
    ) -> Result<SearchWidget, JsValue> {
        let records: Vec<DocumentRecord> = serde_json::from_str(documents_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse document feed: {e}")))?;

        let config = match config_json {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {e}")))?,
            None => WidgetConfig::default(),
        };

        let core = WidgetCore::new(records, config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: Rc::new(RefCell::new(core)),
        })
    }

    /// Run one query and return the suggestion views in rank order.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let views = self.core.borrow_mut().suggest(query);
        serde_wasm_bindgen::to_value(&views).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Wire the widget to the page's `userinput`/`suggestions` elements and
    /// the global keyboard/click shortcuts.
    pub fn attach(&self) -> Result<(), JsValue> {
        crate::dom::attach(Rc::clone(&self.core))
    }

    /// Get the number of indexed documents.
    #[wasm_bindgen(js_name = documentCount)]
    pub fn document_count(&self) -> usize {
        self.core.borrow().document_count()
    }
}

#[cfg(test)]
mod tests {
    use typeahead_core::{Command, WidgetEvent};

    use super::*;

    fn feed() -> Vec<DocumentRecord> {
        serde_json::from_str(
            r#"[
                {"id": 0, "href": "/blog/totoro", "title": "Totoro Guide",
                 "description": "Ghibli viewing order", "tags": ["anime"]},
                {"id": 1, "href": "/blog/cooking", "title": "Cooking",
                 "description": "Weeknight recipes", "tags": ["totoro"]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_suggest_pipeline() {
        let mut core = WidgetCore::new(feed(), WidgetConfig::default()).unwrap();

        let views = core.suggest("totoro");
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].href, "/blog/totoro");
        assert_eq!(views[1].title, "Cooking");
    }

    #[test]
    fn test_empty_query_suggests_nothing() {
        let mut core = WidgetCore::new(feed(), WidgetConfig::default()).unwrap();
        assert!(core.suggest("").is_empty());
        assert!(core.suggest("   ").is_empty());
    }

    #[test]
    fn test_duplicate_feed_fails_construction() {
        let mut records = feed();
        records[1].id = 0;
        assert!(WidgetCore::new(records, WidgetConfig::default()).is_err());
    }

    #[test]
    fn test_controller_rides_along() {
        let mut core = WidgetCore::new(feed(), WidgetConfig::default()).unwrap();
        let n = core.suggest("totoro").len();

        let commands = core
            .controller
            .handle(WidgetEvent::QueryResolved { entry_count: n });
        assert_eq!(commands, vec![Command::ShowPanel]);
        assert!(core.controller.panel_visible());
    }
}
