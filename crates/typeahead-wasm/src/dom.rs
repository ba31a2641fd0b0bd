//! DOM wiring for the plain (non-Leptos) embed.
//!
//! Binds the page's `userinput` and `suggestions` elements, re-renders the
//! panel clear-then-append on every input event, and feeds global
//! keyboard/click events through the interaction controller. Panel
//! visibility is the `d-none` class, toggled only by controller commands.

use std::{cell::RefCell, rc::Rc};

use typeahead_core::{Command, Key, SuggestionView, WidgetEvent};
use wasm_bindgen::{JsCast, prelude::Closure, prelude::JsValue};

use crate::widget::WidgetCore;

/// Attach the widget to the live page.
pub(crate) fn attach(core: Rc<RefCell<WidgetCore>>) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let input: web_sys::HtmlInputElement = document
        .get_element_by_id("userinput")
        .ok_or_else(|| JsValue::from_str("missing #userinput element"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("#userinput is not an input element"))?;

    let panel = document
        .get_element_by_id("suggestions")
        .ok_or_else(|| JsValue::from_str("missing #suggestions element"))?;

    // Per-keystroke recomputation. Each run fully supersedes the previous
    // panel content; nothing is patched incrementally.
    {
        let core = Rc::clone(&core);
        let document = document.clone();
        let input_el = input.clone();
        let panel = panel.clone();
        let handler = Closure::<dyn Fn()>::new(move || {
            let views = core.borrow_mut().suggest(&input_el.value());
            show_results(&document, &input_el, &panel, &core, &views);
        });
        input.add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    // Global keydown: focus shortcut, Escape dismissal, arrow navigation,
    // command/meta+arrow page scrolling.
    {
        let core = Rc::clone(&core);
        let document_ref = document.clone();
        let input = input.clone();
        let panel = panel.clone();
        let handler =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
                let Some(key) = Key::from_dom_key(&ev.key()) else {
                    return;
                };
                let event = WidgetEvent::Key {
                    key,
                    meta: ev.meta_key(),
                    in_text_input: is_text_entry(ev.target()),
                };
                for command in core.borrow_mut().controller.handle(event) {
                    if command == Command::PreventDefault {
                        ev.prevent_default();
                    } else {
                        apply_command(command, &document_ref, &input, &panel);
                    }
                }
            });
        document.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    // Global click: any click inside the panel is acceptance teardown,
    // clicks outside it dismiss. Acceptance never prevents the entry
    // anchor's navigation.
    {
        let core = Rc::clone(&core);
        let document_ref = document.clone();
        let input = input.clone();
        let panel = panel.clone();
        let handler = Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = target
                .as_ref()
                .map(|node| panel.contains(Some(node)))
                .unwrap_or(false);

            let event = if inside {
                WidgetEvent::SuggestionClick
            } else {
                WidgetEvent::OutsideClick
            };

            for command in core.borrow_mut().controller.handle(event) {
                apply_command(command, &document_ref, &input, &panel);
            }
        });
        document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    Ok(())
}

/// Push one query's resolved views through the controller and the panel.
fn show_results(
    document: &web_sys::Document,
    input: &web_sys::HtmlInputElement,
    panel: &web_sys::Element,
    core: &Rc<RefCell<WidgetCore>>,
    views: &[SuggestionView],
) {
    let commands = core.borrow_mut().controller.handle(WidgetEvent::QueryResolved {
        entry_count: views.len(),
    });
    for command in commands {
        apply_command(command, document, input, panel);
    }

    if !views.is_empty() {
        render_entries(document, panel, views);
    }
}

/// Replace the panel content with the given views, in rank order.
fn render_entries(document: &web_sys::Document, panel: &web_sys::Element, views: &[SuggestionView]) {
    panel.set_inner_html("");
    for view in views {
        if let Ok(entry) = build_entry(document, view) {
            let _ = panel.append_child(&entry);
        }
    }
}

/// One suggestion entry: `<div><a href><span/><span/></a></div>`.
fn build_entry(
    document: &web_sys::Document,
    view: &SuggestionView,
) -> Result<web_sys::Element, JsValue> {
    let entry = document.create_element("div")?;
    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &view.href)?;

    let title = document.create_element("span")?;
    title.set_text_content(Some(&view.title));
    let description = document.create_element("span")?;
    description.set_text_content(Some(&view.description));

    anchor.append_child(&title)?;
    anchor.append_child(&description)?;
    entry.append_child(&anchor)?;
    Ok(entry)
}

/// Apply one controller command to the DOM.
fn apply_command(
    command: Command,
    document: &web_sys::Document,
    input: &web_sys::HtmlInputElement,
    panel: &web_sys::Element,
) {
    match command {
        // Handled at the event site, where the event is in scope.
        Command::PreventDefault => {}

        Command::FocusInput => {
            let _ = input.focus();
        }

        Command::BlurInput => {
            let _ = input.blur();
        }

        Command::ShowPanel => {
            let _ = panel.class_list().remove_1("d-none");
        }

        Command::HidePanel => {
            let _ = panel.class_list().add_1("d-none");
        }

        Command::ClearPanel => panel.set_inner_html(""),

        Command::FocusEntry(index) => {
            if let Ok(anchors) = panel.query_selector_all("a")
                && let Some(entry) = anchors
                    .item(index as u32)
                    .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = entry.focus();
            }
        }

        Command::ScrollToTop => {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }

        Command::ScrollToBottom => {
            if let Some(window) = web_sys::window()
                && let Some(body) = document.body()
            {
                window.scroll_to_with_x_and_y(0.0, f64::from(body.scroll_height()));
            }
        }
    }
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
