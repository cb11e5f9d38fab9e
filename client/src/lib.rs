//! # client
//!
//! Leptos frontend for the Apple Gift Card landing page.
//!
//! This crate contains the page, its section components, the static card
//! catalog, and the single piece of UI state (the highlighted card). It is
//! built with `ssr` into the host binary and with `hydrate` into the WASM
//! bundle that attaches click and scroll handlers in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach event handlers to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating landing page");
    leptos::mount::hydrate_body(app::App);
}
