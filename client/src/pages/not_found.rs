//! Fallback for unmatched paths. Never guarded.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <a href=AppRoute::Landing.path()>"Back to Bricks"</a>
        </section>
    }
}
