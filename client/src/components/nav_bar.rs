//! Top navigation with session-aware links.

use leptos::prelude::*;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::session::AppSession;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();

    let account_links = move || {
        let signed_in_name = auth.with(|s| s.user().map(|u| u.name.clone()));
        match signed_in_name {
            Some(name) => {
                let session = session.clone();
                view! {
                    <a href=AppRoute::Dashboard.path()>"Dashboard"</a>
                    <a href=AppRoute::MyWorkouts.path()>"My workouts"</a>
                    <a href=AppRoute::Schedule.path()>"Schedule"</a>
                    <a href=AppRoute::Profile.path() class="nav-bar__user">{name}</a>
                    <button class="nav-bar__logout" on:click=move |_| session.logout()>
                        "Sign out"
                    </button>
                }
                .into_any()
            }
            None => view! {
                <a href=AppRoute::Login.path()>"Sign in"</a>
                <a href=AppRoute::Register.path() class="nav-bar__cta">"Create account"</a>
            }
            .into_any(),
        }
    };

    view! {
        <nav class="nav-bar">
            <a href=AppRoute::Landing.path() class="nav-bar__brand">"Bricks"</a>
            <a href=AppRoute::Personals.path()>"Personals"</a>
            <div class="nav-bar__spacer"></div>
            {account_links}
        </nav>
    }
}
