//! # client
//!
//! Leptos + WASM admin console for procurement and inventory records.
//!
//! This crate contains the route-level pages, the generic table/form
//! components they are assembled from, page state, formatting helpers and
//! the REST wrappers used to talk to `server`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
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
