//! Portfolio site entry point.
//!
//! Client-side rendered Leptos app compiled to wasm and mounted to the body.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for readable error messages in the console
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("portfolio starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading element from `index.html` once the wasm bundle is live.
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    if let Some(loading) = document.get_element_by_id("leptos-loading") {
        if let Some(el) = loading.dyn_ref::<HtmlElement>() {
            let _ = el.class_list().add_1("hidden");
        }
        log::info!("loading screen hidden");
    } else {
        log::warn!("loading element not found");
    }
}
