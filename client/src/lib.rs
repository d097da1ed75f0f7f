//! # client
//!
//! Leptos + WASM frontend for the Bricks trainer/student marketplace.
//!
//! This crate contains the session store and route guard, the auth REST
//! client, pages, and shared components. The `bricks` host crate renders it
//! on the server (`ssr`); the browser bundle hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
