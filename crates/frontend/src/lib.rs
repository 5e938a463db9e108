pub mod app;
pub mod bootstrap;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

/// Element the registration page reserves for the appearance panels
pub const MOUNT_ELEMENT_ID: &str = "appearance-panels";

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());

    match container {
        Some(element) => leptos::mount::mount_to(element, app::App).forget(),
        None => {
            log::warn!("#{} not found, mounting to body", MOUNT_ELEMENT_ID);
            leptos::mount::mount_to_body(app::App);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
