//! # client
//!
//! Leptos + WASM frontend for the RentDesk property manager.
//!
//! This crate holds the request/authorization pipeline (credential store,
//! redirect indirection, HTTP client with interceptors, resource hooks) and
//! the thin view layer that exercises it.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
