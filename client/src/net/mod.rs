//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls behind the `AuthApi` seam and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
