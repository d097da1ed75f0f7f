//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the plain committed snapshot that guards read; `session` is the
//! store that writes it. Pages depend on whichever of the two they need.

pub mod auth;
pub mod session;
