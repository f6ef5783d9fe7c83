//! LC/NC Database pricing site
//!
//! A Leptos pricing & FAQ page rendered from static plan, add-on and FAQ
//! tables. The `ssr` feature builds the axum host binary; `hydrate` builds
//! the browser bundle that makes the billing toggle and FAQ items interactive.

pub mod app;
pub mod billing;
pub mod catalog;
pub mod components;
pub mod error;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod fileserv;

pub use error::{CatalogError, SiteError, SiteResult};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
