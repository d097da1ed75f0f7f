//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. Guarded pages assume `RequireAuth` already granted access.

pub mod account;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod marketplace;
pub mod not_found;
pub mod register;
pub mod schedule;
pub mod workouts;
