//! # client
//!
//! Leptos + WASM frontend for the usage-reports portal.
//!
//! The crate holds the report page, its state slices, the REST helper for the
//! report listing endpoint, and the browser-side bridge to the OpenID Connect
//! identity provider that issues the bearer token.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod identity;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
