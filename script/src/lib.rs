//! Script template: wires a click counter onto a button that already exists
//! in the static page markup.

use counter::Counter;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

/// Id of the button the counter is attached to.
pub const COUNTER_BUTTON_ID: &str = "counter-btn";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    attach_counter(&document)?;

    info!("Frontend Design Vanilla Template initialized");
    info!("Rust/WebAssembly is working!");
    Ok(())
}

/// Attaches a fresh counter to `#counter-btn`.
///
/// Returns `Ok(None)` without touching the document when the button is
/// missing.
pub fn attach_counter(document: &Document) -> Result<Option<HtmlElement>, JsValue> {
    let Some(element) = document.get_element_by_id(COUNTER_BUTTON_ID) else {
        debug!("#{} not found, counter not attached", COUNTER_BUTTON_ID);
        return Ok(None);
    };
    let button: HtmlElement = element.dyn_into()?;

    let mut counter = Counter::new();
    button.set_text_content(Some(&counter.label()));

    let target = button.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || {
        counter.increment();
        target.set_text_content(Some(&counter.label()));
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // the listener lives as long as the page
    on_click.forget();

    Ok(Some(button))
}
