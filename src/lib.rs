//! # contract-panel
//!
//! Leptos + WASM admin panel for contract records: marketing-platform
//! accounts with contact quotas, managed through a REST backend.
//!
//! The `controller` module holds the list/submit/delete flows behind
//! injected API, notifier, and confirmer seams; `components` and `pages`
//! only render `state` and forward user events to it.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
