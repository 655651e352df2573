// lib.rs - Root module for the product_catalog library
//
// The crate is a Leptos front-end for a remote product API. The search
// logic (query state, debounce, pagination) is plain Rust and compiles
// without any feature, so tests and the CLI probe can use it directly.

/// Runtime configuration (API base URL, debounce interval, page sizes)
pub mod config;

/// tracing output to the browser console
pub mod logging;

/// Reusable API payloads for tests and the CLI probe
pub mod fixtures;

/// The web application: models, API client, search core and UI
pub mod web_app;

pub use config::CatalogConfig;

/// WASM entry point: hydrates the server-rendered HTML
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    logging::init_console();
    leptos::mount::hydrate_body(App);
}
