//! # thinkspace-client
//!
//! Leptos frontend for the ThinkSpace whiteboard product: the app shell and
//! its readiness gate, the dashboard navbar, and the marketing feature page.
//!
//! The crate compiles twice. With `ssr` the server renders pages and embeds
//! the HTML shell; with `hydrate` the same components attach to that markup
//! in the browser and take over the provider bootstrap.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
