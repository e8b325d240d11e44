#![cfg(target_arch = "wasm32")]

use script::{COUNTER_BUTTON_ID, attach_counter};
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

// gives each test its own page section with or without the button
fn page(with_button: bool) -> Element {
    let document = document();
    if let Some(stale) = document.get_element_by_id(COUNTER_BUTTON_ID) {
        stale.remove();
    }
    let section = document.create_element("section").unwrap();
    if with_button {
        let button = document.create_element("button").unwrap();
        button.set_id(COUNTER_BUTTON_ID);
        button.set_text_content(Some("计数: 0"));
        section.append_child(&button).unwrap();
    }
    document.body().unwrap().append_child(&section).unwrap();
    section
}

#[wasm_bindgen_test]
fn three_clicks() {
    let _page = page(true);
    let button = attach_counter(&document()).unwrap().expect("button attached");

    for _ in 0..3 {
        button.click();
    }
    assert_eq!(button.text_content().unwrap(), "计数: 3");
}

#[wasm_bindgen_test]
fn label_tracks_every_click() {
    let _page = page(true);
    let button = attach_counter(&document()).unwrap().unwrap();
    assert_eq!(button.text_content().unwrap(), "计数: 0");

    for expected in 1..=20 {
        button.click();
        assert_eq!(button.text_content().unwrap(), format!("计数: {expected}"));
    }
}

#[wasm_bindgen_test]
fn missing_button_is_a_no_op() {
    let _page = page(false);
    let document = document();
    let body = document.body().unwrap();
    let children_before = body.child_element_count();
    let markup_before = body.inner_html();

    let attached = attach_counter(&document).unwrap();

    assert!(attached.is_none());
    assert!(document.get_element_by_id(COUNTER_BUTTON_ID).is_none());
    assert_eq!(body.child_element_count(), children_before);
    assert_eq!(body.inner_html(), markup_before);
}
