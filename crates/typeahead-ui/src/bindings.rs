//! Global keyboard and click bindings.
//!
//! Translates document-level events into [`WidgetEvent`]s for the core
//! interaction state machine and applies the returned [`Command`]s to the
//! DOM. All decisions live in the controller; this module only adapts.

use std::{cell::RefCell, rc::Rc};

use leptos::prelude::*;
use typeahead_core::{Command, Controller, Key, WidgetEvent};
use wasm_bindgen::{JsCast, prelude::Closure};

/// Hook component wiring the global interaction model.
///
/// Registers document-level `keydown` and `click` listeners: `/` focuses
/// the search input, Escape dismisses, arrows navigate the suggestion
/// anchors with clamping, command/meta+arrows scroll the page, and clicks
/// outside the panel hide it.
#[component]
#[allow(clippy::unused_unit)]
pub fn InteractionBindings(
    /// Panel visibility signal shared with the suggestion panel.
    visible: RwSignal<bool>,
    /// Number of suggestion entries currently rendered.
    entry_count: Signal<usize>,
) -> impl IntoView {
    let controller = Rc::new(RefCell::new(Controller::new()));

    // Rendering outcomes feed back into the state machine: non-empty
    // results show the panel, empty results only clear it.
    Effect::new({
        let controller = Rc::clone(&controller);
        move |_| {
            let event = WidgetEvent::QueryResolved {
                entry_count: entry_count.get(),
            };
            for command in controller.borrow_mut().handle(event) {
                apply(command, visible);
            }
        }
    });

    // Global keydown listener.
    Effect::new({
        let controller = Rc::clone(&controller);
        move |_| {
            let controller = Rc::clone(&controller);
            let handler = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(
                move |ev: web_sys::KeyboardEvent| {
                    let Some(key) = Key::from_dom_key(&ev.key()) else {
                        return;
                    };
                    let event = WidgetEvent::Key {
                        key,
                        meta: ev.meta_key(),
                        in_text_input: is_text_entry(ev.target()),
                    };
                    for command in controller.borrow_mut().handle(event) {
                        if command == Command::PreventDefault {
                            ev.prevent_default();
                        } else {
                            apply(command, visible);
                        }
                    }
                },
            );

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document
                    .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
            }

            // Leak the closure to keep it alive
            handler.forget();
        }
    });

    // Global click listener for outside-click dismissal. Clicks on
    // suggestion entries are handled by the entry components themselves.
    Effect::new({
        let controller = Rc::clone(&controller);
        move |_| {
            let controller = Rc::clone(&controller);
            let handler =
                Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
                    if panel_contains(ev.target()) {
                        return;
                    }
                    for command in controller.borrow_mut().handle(WidgetEvent::OutsideClick) {
                        apply(command, visible);
                    }
                });

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document
                    .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
            }

            handler.forget();
        }
    });
}

/// Whether the event target is already a text-entry element.
fn is_text_entry(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| {
            let tag = el.tag_name();
            tag == "INPUT" || tag == "TEXTAREA" || el.is_content_editable()
        })
        .unwrap_or(false)
}

/// Whether the event target sits inside the suggestion panel subtree.
fn panel_contains(target: Option<web_sys::EventTarget>) -> bool {
    let Some(node) = target.and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("suggestions"))
        .map(|panel| panel.contains(Some(&node)))
        .unwrap_or(false)
}

/// Apply one controller command to the DOM.
fn apply(command: Command, visible: RwSignal<bool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    match command {
        // Handled at the event site, where the event is in scope.
        Command::PreventDefault => {}

        Command::FocusInput => {
            if let Some(input) = html_element_by_id(&document, "userinput") {
                let _ = input.focus();
            }
        }

        Command::BlurInput => {
            if let Some(input) = html_element_by_id(&document, "userinput") {
                let _ = input.blur();
            }
        }

        Command::ShowPanel => visible.set(true),
        Command::HidePanel => visible.set(false),

        // Panel content is signal-driven in the Leptos sink; clearing the
        // views signal is the owner's job.
        Command::ClearPanel => {}

        Command::FocusEntry(index) => {
            if let Some(panel) = document.get_element_by_id("suggestions")
                && let Ok(anchors) = panel.query_selector_all("a")
                && let Some(entry) = anchors
                    .item(index as u32)
                    .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = entry.focus();
            }
        }

        Command::ScrollToTop => window.scroll_to_with_x_and_y(0.0, 0.0),

        Command::ScrollToBottom => {
            if let Some(body) = document.body() {
                window.scroll_to_with_x_and_y(0.0, f64::from(body.scroll_height()));
            }
        }
    }
}

fn html_element_by_id(document: &web_sys::Document, id: &str) -> Option<web_sys::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}
