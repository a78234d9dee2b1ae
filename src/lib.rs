//! # register-client
//!
//! Leptos + WASM registration page: collects name, email and password,
//! validates them client-side, submits them to the auth API and reports the
//! outcome with toast notifications.
//!
//! Submit semantics live in `pages::register_flow` behind small collaborator
//! traits; everything else is rendering and browser wiring.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
