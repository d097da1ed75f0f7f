//! Landing dashboard for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once `RequireAuth` opens `/dashboard`. The variant comes from
//! `routes::dispatch`, the same decision the guard uses.

use leptos::prelude::*;

use crate::routes::{AppRoute, RouteView, dispatch};
use crate::state::auth::AuthState;
use crate::util::auth::DashboardVariant;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        let (route_view, name) = auth.with(|s| {
            (dispatch(&AppRoute::Dashboard, s), s.user().map(|u| u.name.clone()).unwrap_or_default())
        });
        match route_view {
            RouteView::Dashboard(DashboardVariant::Trainer) => view! { <TrainerDashboard name=name/> }.into_any(),
            RouteView::Dashboard(DashboardVariant::Student) => view! { <StudentDashboard name=name/> }.into_any(),
            RouteView::Loading | RouteView::Redirect(_) | RouteView::Page(_) => ().into_any(),
        }
    }
}

/// Dashboard for personal trainers: students, schedule, published workouts.
#[component]
pub fn TrainerDashboard(name: String) -> impl IntoView {
    view! {
        <section class="dashboard dashboard--trainer">
            <header class="dashboard__header">
                <h1>{format!("Welcome back, {name}")}</h1>
                <p>"Manage your students, sessions and workout plans."</p>
            </header>
            <div class="dashboard__grid">
                <a class="dashboard__card" href=AppRoute::Students.path()>
                    <h2>"Students"</h2>
                    <p>"Follow progress and assign plans."</p>
                </a>
                <a class="dashboard__card" href=AppRoute::Schedule.path()>
                    <h2>"Schedule"</h2>
                    <p>"Upcoming sessions this week."</p>
                </a>
                <a class="dashboard__card" href=AppRoute::NewWorkout.path()>
                    <h2>"New workout"</h2>
                    <p>"Publish a plan to the marketplace."</p>
                </a>
                <a class="dashboard__card" href=AppRoute::Workouts.path()>
                    <h2>"Marketplace"</h2>
                    <p>"See how your workouts are listed."</p>
                </a>
            </div>
        </section>
    }
}

/// Dashboard for students: current plans and trainer discovery.
#[component]
pub fn StudentDashboard(name: String) -> impl IntoView {
    view! {
        <section class="dashboard dashboard--student">
            <header class="dashboard__header">
                <h1>{format!("Hi, {name}")}</h1>
                <p>"Keep your streak going."</p>
            </header>
            <div class="dashboard__grid">
                <a class="dashboard__card" href=AppRoute::MyWorkouts.path()>
                    <h2>"My workouts"</h2>
                    <p>"Plans you have joined."</p>
                </a>
                <a class="dashboard__card" href=AppRoute::Schedule.path()>
                    <h2>"Schedule"</h2>
                    <p>"Your booked sessions."</p>
                </a>
                <a class="dashboard__card" href=AppRoute::Workouts.path()>
                    <h2>"Browse workouts"</h2>
                    <p>"Find a plan that fits your goals."</p>
                </a>
                <a class="dashboard__card" href=AppRoute::Personals.path()>
                    <h2>"Find a personal"</h2>
                    <p>"Trainers near you."</p>
                </a>
            </div>
        </section>
    }
}
