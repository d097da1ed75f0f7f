//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware components to decide between the
//! loading view, a login redirect, and identity-dependent rendering. Written
//! only by `SessionStore` commits.
//!
//! INVARIANTS
//! ==========
//! - `user` is present iff the `token` it was validated with is present.
//! - `loading` is true only before the first commit after startup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Authentication state tracking the token, current user and loading status.
///
/// Fields are private so token and user can only change together.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    token: Option<String>,
    user: Option<UserProfile>,
    loading: bool,
}

impl Default for AuthState {
    /// Startup state: nothing known yet, hydration pending.
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl AuthState {
    /// Settled state holding a validated token and its owner.
    pub fn signed_in(token: impl Into<String>, user: UserProfile) -> Self {
        Self { token: Some(token.into()), user: Some(user), loading: false }
    }

    /// Settled unauthenticated state.
    pub fn signed_out() -> Self {
        Self { token: None, user: None, loading: false }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
