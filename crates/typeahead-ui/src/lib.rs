//! Typeahead UI Components
//!
//! Leptos components for the typeahead search widget.
//!
//! # Components
//!
//! - [`SearchInput`] - The search text input (`userinput`)
//! - [`SuggestionList`] - The suggestion panel (`suggestions`)
//! - [`InteractionBindings`] - Global keyboard/click bindings driving the
//!   core interaction state machine
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use typeahead_ui::{InteractionBindings, SearchInput, SuggestionList};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let query = RwSignal::new(String::new());
//!     let views = RwSignal::new(Vec::new());
//!     let visible = RwSignal::new(false);
//!
//!     view! {
//!         <SearchInput query=query />
//!         <SuggestionList
//!             views=views.into()
//!             visible=visible.into()
//!             on_accept=Callback::new(move |()| views.set(Vec::new()))
//!         />
//!         <InteractionBindings
//!             visible=visible
//!             entry_count=Signal::derive(move || views.get().len())
//!         />
//!     }
//! }
//! ```

pub mod bindings;
pub mod search;

pub use bindings::InteractionBindings;
pub use search::{SearchInput, SuggestionList};
