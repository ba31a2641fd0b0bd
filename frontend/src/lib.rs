//! Client-side demo page.
//!
//! Mounts the search widget over a small built-in document feed so the
//! components can be exercised with `trunk serve` without a site build.

use std::{cell::RefCell, rc::Rc};

use leptos::prelude::*;
use typeahead_core::{DocumentRecord, DocumentStore, WidgetConfig, resolve_suggestions};
use typeahead_index::{QueryEngine, SearchOptions, rank};
use typeahead_ui::{InteractionBindings, SearchInput, SuggestionList};

/// Stand-in for the feed a site build would emit next to its pages.
const DEMO_FEED: &str = r#"[
  {"id": 0, "href": "/blog/first-post", "title": "First Post",
   "description": "Hello world, and what this site is about",
   "tags": ["meta"]},
  {"id": 1, "href": "/blog/rust-wasm", "title": "Rust on the Frontend",
   "description": "Compiling widgets to WebAssembly",
   "tags": ["rust", "wasm"]},
  {"id": 2, "href": "/blog/static-sites", "title": "Static Site Search",
   "description": "Serving search without a server",
   "tags": ["search", "hugo"]},
  {"id": 3, "href": "/blog/totoro", "title": "My Neighbor Totoro",
   "description": "A rewatch, twenty years later",
   "tags": ["film"]}
]"#;

#[component]
pub fn App() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let views = RwSignal::new(Vec::new());
    let visible = RwSignal::new(false);

    let records: Vec<DocumentRecord> =
        serde_json::from_str(DEMO_FEED).expect("demo feed is well-formed");
    let config = WidgetConfig::default();
    let store = DocumentStore::from_records(records);
    let engine = Rc::new(RefCell::new(
        QueryEngine::build(&store, &config).expect("demo feed has unique ids"),
    ));

    // Recompute suggestions on every keystroke.
    Effect::new({
        let engine = Rc::clone(&engine);
        move |_| {
            let q = query.get();
            let options = SearchOptions::from_config(&config);
            let hits = engine.borrow_mut().search(&q, &options);
            let ranked = rank(&hits);

            views.set(resolve_suggestions(
                &store,
                ranked.into_iter().map(|r| r.id),
                config.result_count,
            ));
        }
    });

    let entry_count = Signal::derive(move || views.with(|v| v.len()));
    let on_accept = Callback::new(move |()| views.set(Vec::new()));

    view! {
      <main class="typeahead-demo">
        <h1>"Site search"</h1>
        <SearchInput query=query />
        <SuggestionList views=views.into() visible=visible.into() on_accept=on_accept />
        <InteractionBindings visible=visible entry_count=entry_count />
      </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
