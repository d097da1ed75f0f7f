//! Public landing page.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class="landing">
            <h1>"Bricks"</h1>
            <p class="landing__tagline">"Personal trainers and students, one workout at a time."</p>
            <div class="landing__actions">
                <a class="login-button" href=AppRoute::Personals.path()>"Find a personal"</a>
                <a class="login-button login-button--ghost" href=AppRoute::Register.path()>"Get started"</a>
            </div>
        </section>
    }
}
