#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web::{App, LINKS, TITLE};

wasm_bindgen_test_configure!(run_in_browser);

// lets the reactive system flush pending effects
async fn tick() {
    TimeoutFuture::new(0).await;
}

fn test_wrapper() -> web_sys::HtmlElement {
    let document = document();
    let wrapper = document.create_element("section").unwrap();
    document.body().unwrap().append_child(&wrapper).unwrap();
    wrapper.unchecked_into()
}

fn button(wrapper: &web_sys::HtmlElement) -> web_sys::HtmlElement {
    wrapper
        .query_selector("button")
        .unwrap()
        .expect("counter button")
        .unchecked_into()
}

#[wasm_bindgen_test]
async fn counts_clicks() {
    let wrapper = test_wrapper();
    let _dispose = mount_to(wrapper.clone(), || view! { <App/> });
    let button = button(&wrapper);

    assert_eq!(button.text_content().unwrap(), "计数: 0");

    button.click();
    tick().await;
    assert_eq!(button.text_content().unwrap(), "计数: 1");

    for _ in 0..9 {
        button.click();
    }
    tick().await;
    assert_eq!(button.text_content().unwrap(), "计数: 10");
}

#[wasm_bindgen_test]
async fn remount_starts_from_zero() {
    let wrapper = test_wrapper();
    {
        let _dispose = mount_to(wrapper.clone(), || view! { <App/> });
        button(&wrapper).click();
        tick().await;
        assert_eq!(button(&wrapper).text_content().unwrap(), "计数: 1");
    }

    let wrapper = test_wrapper();
    let _dispose = mount_to(wrapper.clone(), || view! { <App/> });
    assert_eq!(button(&wrapper).text_content().unwrap(), "计数: 0");
}

#[wasm_bindgen_test]
fn renders_static_content() {
    let wrapper = test_wrapper();
    let _dispose = mount_to(wrapper.clone(), || view! { <App/> });

    let title = wrapper.query_selector("header h1").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), TITLE);

    let anchors = wrapper.query_selector_all(".links a").unwrap();
    assert_eq!(anchors.length() as usize, LINKS.len());
    for (i, link) in LINKS.iter().enumerate() {
        let anchor: web_sys::Element = anchors.item(i as u32).unwrap().unchecked_into();
        assert_eq!(anchor.get_attribute("href").unwrap(), link.href);
        assert_eq!(anchor.get_attribute("target").unwrap(), "_blank");
        assert_eq!(anchor.get_attribute("rel").unwrap(), "noreferrer");
    }

    assert_eq!(wrapper.query_selector_all(".info li").unwrap().length(), 5);
}
