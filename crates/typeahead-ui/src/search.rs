//! Search input and suggestion panel components.
//!
//! The panel contract mirrors the widget's DOM surface: the input carries
//! the `userinput` id, the panel the `suggestions` id, and visibility is
//! the `d-none` class. Empty result sets clear content without touching
//! visibility; hiding is the interaction layer's decision.

use leptos::prelude::*;
use typeahead_core::SuggestionView;

/// Search box input component.
///
/// Re-renders suggestions on every input event; there is no debounce.
#[component]
pub fn SearchInput(
    /// Placeholder text for the input.
    #[prop(default = "Search...".to_string())]
    placeholder: String,
    /// Signal tracking the current query.
    query: RwSignal<String>,
) -> impl IntoView {
    view! {
      <input
        id="userinput"
        type="text"
        class="typeahead-input"
        placeholder=placeholder
        autocomplete="off"
        prop:value=move || query.get()
        on:input=move |ev| {
          query.set(event_target_value(&ev));
        }
      />
    }
}

/// Suggestion panel component.
#[component]
pub fn SuggestionList(
    /// Ranked suggestion views, already truncated for display.
    views: Signal<Vec<SuggestionView>>,
    /// Panel visibility, owned by the interaction layer.
    visible: Signal<bool>,
    /// Acceptance teardown; the anchor's default navigation still proceeds.
    on_accept: Callback<()>,
) -> impl IntoView {
    view! {
      <div id="suggestions" class="typeahead-suggestions" class:d-none=move || !visible.get()>
        // Keyed by position: hrefs are not unique, since href-less feed
        // entries all render "" and pages can share a permalink.
        <For
          each=move || views.get().into_iter().enumerate()
          key=|(index, _)| *index
          children=move |(_, view)| {
            view! { <SuggestionEntry view=view on_accept=on_accept /> }
          }
        />

      </div>
    }
}

/// Individual suggestion entry component.
#[component]
fn SuggestionEntry(
    /// The suggestion to display.
    view: SuggestionView,
    /// Invoked on click, before default navigation.
    on_accept: Callback<()>,
) -> impl IntoView {
    view! {
      <div class="typeahead-entry">
        <a
          href=view.href.clone()
          class="typeahead-link"
          on:click=move |_| {
            on_accept.run(());
          }
        >
          <span class="typeahead-title">{view.title.clone()}</span>
          <span class="typeahead-description">{view.description.clone()}</span>
        </a>
      </div>
    }
}
