//! # uppick-client
//!
//! Leptos + WASM browser client for the UP-PICK auction marketplace.
//!
//! The heart of the crate is the authenticated request pipeline in [`net`]:
//! every backend call goes through one client that attaches the stored bearer
//! credential and turns a 401 into a single, global session teardown. The
//! [`session`] module owns the credential store and the reactive auth state
//! that pages render from.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
