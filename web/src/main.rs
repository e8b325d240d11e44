use leptos::prelude::*;

use web::App;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Frontend Design Leptos Template initialized");

    mount_to_body(|| view! { <App/> })
}
