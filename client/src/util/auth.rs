//! Shared auth guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes must apply identical loading/redirect behavior, and the
//! dashboard must branch on role in exactly one place. Both decisions are
//! pure functions of `AuthState` so they can be tested without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{UserProfile, UserType};
use crate::routes::{AppRoute, RouteView};
use crate::state::auth::AuthState;

/// Observable guard outcome for a protected navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardStatus {
    /// Hydration still running; show the loading view, decide nothing.
    Pending,
    /// Settled without a user; send to the login page.
    Denied,
    Granted,
}

/// Dashboard flavor for a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardVariant {
    Trainer,
    Student,
}

pub fn guard_status(state: &AuthState) -> GuardStatus {
    if state.is_loading() {
        GuardStatus::Pending
    } else if state.is_authenticated() {
        GuardStatus::Granted
    } else {
        GuardStatus::Denied
    }
}

pub fn dashboard_variant(user_type: UserType) -> DashboardVariant {
    match user_type {
        UserType::Personal => DashboardVariant::Trainer,
        UserType::Student => DashboardVariant::Student,
    }
}

/// Where a freshly signed-in user lands.
pub fn post_login_destination(user: &UserProfile) -> AppRoute {
    if user.must_change_password_on_first_login {
        AppRoute::Settings
    } else {
        AppRoute::Dashboard
    }
}

/// Follow `view` whenever it settles on a redirect, replacing the history entry.
pub fn install_redirect<F>(view: Memo<RouteView>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = view.with(|v| v.redirect_target().map(AppRoute::path)) {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
