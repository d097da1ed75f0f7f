//! Workout marketplace and enrolled-workout pages (guarded).

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::UserType;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

fn route_id() -> impl Fn() -> String + Copy {
    let params = use_params_map();
    move || params.with(|p| p.get("id").unwrap_or_default())
}

#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let is_trainer = move || auth.with(|s| s.user().is_some_and(|u| u.user_type == UserType::Personal));

    view! {
        <section class="workouts">
            <header class="workouts__header">
                <h1>"Workouts"</h1>
                <Show when=is_trainer>
                    <a class="login-button" href=AppRoute::NewWorkout.path()>"New workout"</a>
                </Show>
            </header>
            <p>"No workouts published yet."</p>
        </section>
    }
}

#[component]
pub fn NewWorkoutPage() -> impl IntoView {
    view! {
        <section class="workouts workouts--new">
            <h1>"New workout"</h1>
            <a href=AppRoute::Workouts.path()>"Cancel"</a>
        </section>
    }
}

#[component]
pub fn WorkoutDetailPage() -> impl IntoView {
    let id = route_id();
    view! {
        <section class="workouts workouts--detail">
            <a href=AppRoute::Workouts.path()>"All workouts"</a>
            <h1>"Workout"</h1>
            <p class="workouts__id">{id}</p>
        </section>
    }
}

#[component]
pub fn MyWorkoutsPage() -> impl IntoView {
    view! {
        <section class="workouts workouts--mine">
            <h1>"My workouts"</h1>
            <p>"You have not joined any workout yet."</p>
        </section>
    }
}

#[component]
pub fn MyWorkoutDetailPage() -> impl IntoView {
    let id = route_id();
    view! {
        <section class="workouts workouts--detail">
            <a href=AppRoute::MyWorkouts.path()>"My workouts"</a>
            <h1>"Workout progress"</h1>
            <p class="workouts__id">{id}</p>
        </section>
    }
}
