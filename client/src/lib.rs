//! # hub-client
//!
//! Leptos + WASM frontend for the student project hub.
//!
//! The centrepiece is the chat widget (`chat`, `components::chat_widget`),
//! which forwards questions to `/api/chat` one at a time and always ends a
//! submission with a bot reply. The remaining components are small page
//! helpers: list search, character counters, submit locking, back-to-top.

pub mod app;
pub mod chat;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
