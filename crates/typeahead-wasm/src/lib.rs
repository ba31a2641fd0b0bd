//! Typeahead WASM Runtime
//!
//! Browser-side incremental search widget for static sites.
//!
//! # Features
//!
//! - **SearchWidget**: loads the page's document feed, builds the index
//!   once, and serves ranked suggestions per keystroke
//! - **DOM wiring**: `attach()` binds the `userinput`/`suggestions`
//!   elements and the global keyboard/click shortcuts
//! - **Highlighting bootstrap**: tags `pre code` blocks through the
//!   language alias registry; independent of the search core
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { SearchWidget, highlightAll } from 'typeahead-wasm';
//!
//! await init();
//! highlightAll();
//!
//! try {
//!   const widget = await SearchWidget.load('/search-feed.json');
//!   widget.attach();
//! } catch (e) {
//!   // Search degrades to "no suggestions"; the page keeps working.
//!   console.error(e);
//! }
//! ```

mod dom;
pub mod highlight;
pub mod widget;

pub use highlight::Language;
use wasm_bindgen::prelude::*;
pub use widget::SearchWidget;

/// Initialize the WASM module.
///
/// Sets up panic hook for better error messages in the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the widget library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
