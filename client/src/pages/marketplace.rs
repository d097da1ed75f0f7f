//! Public trainer marketplace: listing and profile detail.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::AppRoute;

#[component]
pub fn PersonalsPage() -> impl IntoView {
    view! {
        <section class="marketplace">
            <header class="marketplace__header">
                <h1>"Personals"</h1>
                <p>"Browse certified trainers and their workout plans."</p>
            </header>
            <div class="marketplace__list" data-empty="true">
                <p>"No trainers to show yet."</p>
            </div>
        </section>
    }
}

#[component]
pub fn PersonalDetailPage() -> impl IntoView {
    let params = use_params_map();
    let personal_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <section class="marketplace marketplace--detail">
            <a href=AppRoute::Personals.path()>"All personals"</a>
            <h1>"Trainer profile"</h1>
            <p class="marketplace__id">{personal_id}</p>
        </section>
    }
}
