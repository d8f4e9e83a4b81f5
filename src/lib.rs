//! # escreva-client
//!
//! Leptos + WASM frontend for the Escreva+ essay submission and correction
//! platform. Students draft and submit essays; teachers review and correct
//! them. Both roles share the same application, separated by role-guarded
//! routes.
//!
//! This crate contains pages, components, application state, the persisted
//! session store, and the REST auth client. Rendering is SSR + hydration:
//! browser-only behavior (network, localStorage, navigation) is gated behind
//! the `hydrate` feature and no-ops on the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
