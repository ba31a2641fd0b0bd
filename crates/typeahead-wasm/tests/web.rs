//! Browser smoke tests, run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use typeahead_wasm::SearchWidget;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn widget_builds_and_searches_from_json() {
    let widget = SearchWidget::from_json(
        r#"[
            {"id": 0, "href": "/blog/totoro", "title": "Totoro Guide",
             "description": "Ghibli viewing order", "tags": ["anime"]},
            {"id": 1, "href": "/blog/cooking", "title": "Cooking",
             "description": "Weeknight recipes"}
        ]"#,
    )
    .unwrap();

    assert_eq!(widget.document_count(), 2);

    let value = widget.search("toto").unwrap();
    assert!(value.is_object());
}

#[wasm_bindgen_test]
fn malformed_feed_is_rejected() {
    assert!(SearchWidget::from_json("not json").is_err());
    assert!(SearchWidget::from_json(r#"[{"href": "/no-id"}]"#).is_err());
}

#[wasm_bindgen_test]
fn in_panel_click_clears_suggestions() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();

    let input: web_sys::HtmlInputElement = document
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_id("userinput");
    body.append_child(&input).unwrap();
    let panel = document.create_element("div").unwrap();
    panel.set_id("suggestions");
    body.append_child(&panel).unwrap();

    let widget = SearchWidget::from_json(
        r#"[{"id": 0, "href": "/blog/totoro", "title": "Totoro Guide",
             "description": "Ghibli viewing order"}]"#,
    )
    .unwrap();
    widget.attach().unwrap();

    input.set_value("toto");
    input
        .dispatch_event(&web_sys::Event::new("input").unwrap())
        .unwrap();
    assert_eq!(panel.child_element_count(), 1);

    // A click on the entry wrapper, outside its anchor, still tears the
    // panel down.
    let entry = panel.first_element_child().unwrap();
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    let click = web_sys::MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    entry.dispatch_event(&click).unwrap();

    assert_eq!(panel.child_element_count(), 0);

    body.remove_child(&input).unwrap();
    body.remove_child(&panel).unwrap();
}

#[wasm_bindgen_test]
fn highlight_all_rewrites_alias_classes() {
    let document = web_sys::window().unwrap().document().unwrap();
    let pre = document.create_element("pre").unwrap();
    let code = document.create_element("code").unwrap();
    code.set_class_name("language-toml");
    pre.append_child(&code).unwrap();
    document.body().unwrap().append_child(&pre).unwrap();

    typeahead_wasm::highlight::highlight_all();

    assert!(code.class_list().contains("language-ini"));
    assert!(code.class_list().contains("hljs"));
    assert!(!code.class_list().contains("language-toml"));

    let _ = document.body().unwrap().remove_child(&pre);
}
