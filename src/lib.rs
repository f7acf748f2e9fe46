//! # taskdeck
//!
//! Leptos + WASM frontend for the task manager. Pages drive the HTTP modules
//! against the REST backend under `/api/v1`; the session controller owns
//! authentication state and the cookie-stored bearer token.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
