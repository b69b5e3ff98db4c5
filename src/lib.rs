//! # hrm-client
//!
//! Leptos + WASM frontend for the multi-tenant HR management platform:
//! role-guarded routing, session lifecycle against the REST backend, and
//! the attendance, leave, and document screens.
//!
//! The crate is consumed two ways: compiled to WASM with the `hydrate`
//! feature for the browser, and by the SSR host with the `ssr` feature.
//! Unit tests run natively with neither feature, exercising the pure
//! decision logic directly.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log forwarding and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
