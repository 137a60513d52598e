//! # client
//!
//! Leptos + WASM frontend for the Warnesia marketing and account pages.
//!
//! This crate contains the landing, login, signup, and dashboard pages, the
//! form validation and submit orchestration behind them, a simulated auth
//! backend persisted in `localStorage`, and the notification and loading UI.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
