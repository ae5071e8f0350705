//! # medplan-client
//!
//! Leptos + WASM frontend for the MedPlan medication-review application.
//!
//! This crate contains pages, components, the session store, the typed API
//! client, the navigation guard, and the embedded localization catalogs.
//! Browser-only code (HTTP transport, localStorage) is gated behind the
//! `hydrate` feature so the state and wiring logic stays testable with a
//! plain `cargo test`.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;

/// WASM entry point — hydrates the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
