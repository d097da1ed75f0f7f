//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, the auth guard) and read
//! session state from Leptos context providers.

pub mod nav_bar;
pub mod require_auth;
