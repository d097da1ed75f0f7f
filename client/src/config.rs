//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read process env at runtime, so the API prefix is
//! baked in at build time. An empty prefix means same-origin requests, which
//! is how the `bricks` host serves the app (it forwards `/api/*`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the bearer token between reloads.
pub const TOKEN_STORAGE_KEY: &str = "bricks_token";

/// Build-time override for the backend prefix, e.g. `https://api.bricks.fit`.
const API_BASE_ENV: Option<&str> = option_env!("BRICKS_API_BASE");

/// API prefix for REST calls with any trailing slash removed.
pub fn api_base() -> String {
    normalize_base(API_BASE_ENV.unwrap_or_default())
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Join `base` and an absolute API `path`.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{base}{path}")
}
