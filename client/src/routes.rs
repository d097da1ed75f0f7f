//! Route table and pure dispatch rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` declares the same paths for `leptos_router`. `RequireAuth`
//! wraps those routes and asks `dispatch` what the current location shows, so
//! this is the one place guarding and the dashboard role branch are decided.
//!
//! INVARIANTS
//! ==========
//! - Guarded routes never render before hydration settles.
//! - Only `/dashboard` branches on role, via `dashboard_variant`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::AuthState;
use crate::util::auth::{DashboardVariant, GuardStatus, dashboard_variant, guard_status};

/// Every page the client can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    Login,
    Register,
    Personals,
    PersonalDetail(String),
    Dashboard,
    Workouts,
    NewWorkout,
    WorkoutDetail(String),
    MyWorkouts,
    MyWorkoutDetail(String),
    Schedule,
    Students,
    Profile,
    Settings,
    /// Unmatched path, kept verbatim.
    NotFound(String),
}

/// What the router shows for a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteView {
    Loading,
    Redirect(AppRoute),
    Page(AppRoute),
    Dashboard(DashboardVariant),
}

/// Coarse outcome for the router wrapper; pages refine `Open` themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Loading,
    Redirecting,
    Open,
}

impl RouteView {
    pub fn gate(&self) -> Gate {
        match self {
            Self::Loading => Gate::Loading,
            Self::Redirect(_) => Gate::Redirecting,
            Self::Page(_) | Self::Dashboard(_) => Gate::Open,
        }
    }

    /// Navigation target when this view is a redirect.
    pub fn redirect_target(&self) -> Option<&AppRoute> {
        match self {
            Self::Redirect(target) => Some(target),
            _ => None,
        }
    }
}

impl AppRoute {
    /// Match a URL path (query string and fragment ignored).
    pub fn parse(path: &str) -> Self {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = bare.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Landing,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["personals"] => Self::Personals,
            ["personals", id] => Self::PersonalDetail((*id).to_owned()),
            ["dashboard"] => Self::Dashboard,
            ["workouts"] => Self::Workouts,
            ["workouts", "new"] => Self::NewWorkout,
            ["workouts", id] => Self::WorkoutDetail((*id).to_owned()),
            ["my-workouts"] => Self::MyWorkouts,
            ["my-workouts", id] => Self::MyWorkoutDetail((*id).to_owned()),
            ["schedule"] => Self::Schedule,
            ["students"] => Self::Students,
            ["profile"] => Self::Profile,
            ["settings"] => Self::Settings,
            _ => Self::NotFound(bare.to_owned()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Personals => "/personals".to_owned(),
            Self::PersonalDetail(id) => format!("/personals/{id}"),
            Self::Dashboard => "/dashboard".to_owned(),
            Self::Workouts => "/workouts".to_owned(),
            Self::NewWorkout => "/workouts/new".to_owned(),
            Self::WorkoutDetail(id) => format!("/workouts/{id}"),
            Self::MyWorkouts => "/my-workouts".to_owned(),
            Self::MyWorkoutDetail(id) => format!("/my-workouts/{id}"),
            Self::Schedule => "/schedule".to_owned(),
            Self::Students => "/students".to_owned(),
            Self::Profile => "/profile".to_owned(),
            Self::Settings => "/settings".to_owned(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Whether the route sits behind the auth guard.
    pub fn is_guarded(&self) -> bool {
        match self {
            Self::Landing
            | Self::Login
            | Self::Register
            | Self::Personals
            | Self::PersonalDetail(_)
            | Self::NotFound(_) => false,
            Self::Dashboard
            | Self::Workouts
            | Self::NewWorkout
            | Self::WorkoutDetail(_)
            | Self::MyWorkouts
            | Self::MyWorkoutDetail(_)
            | Self::Schedule
            | Self::Students
            | Self::Profile
            | Self::Settings => true,
        }
    }
}

/// Decide what the URL `path` renders under `state`.
pub fn dispatch_path(path: &str, state: &AuthState) -> RouteView {
    dispatch(&AppRoute::parse(path), state)
}

/// Decide what `route` renders under `state`. Performs no I/O.
pub fn dispatch(route: &AppRoute, state: &AuthState) -> RouteView {
    if !route.is_guarded() {
        return RouteView::Page(route.clone());
    }
    match (guard_status(state), state.user()) {
        (GuardStatus::Pending, _) => RouteView::Loading,
        (GuardStatus::Granted, Some(user)) if *route == AppRoute::Dashboard => {
            RouteView::Dashboard(dashboard_variant(user.user_type))
        }
        (GuardStatus::Granted, Some(_)) => RouteView::Page(route.clone()),
        (GuardStatus::Denied | GuardStatus::Granted, _) => RouteView::Redirect(AppRoute::Login),
    }
}
