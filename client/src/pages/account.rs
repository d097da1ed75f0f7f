//! Profile and settings pages for the signed-in user (guarded).

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || auth.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());
    let email = move || auth.with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default());
    let role = move || auth.with(|s| s.user().map(|u| u.user_type.as_str()).unwrap_or_default());

    view! {
        <section class="profile">
            <h1>"Profile"</h1>
            <dl class="profile__fields">
                <dt>"Name"</dt>
                <dd>{name}</dd>
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Account type"</dt>
                <dd>{role}</dd>
            </dl>
        </section>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let must_change_password =
        move || auth.with(|s| s.user().is_some_and(|u| u.must_change_password_on_first_login));

    view! {
        <section class="settings">
            <h1>"Settings"</h1>
            <Show when=must_change_password>
                <p class="settings__notice">"Please choose a new password before continuing."</p>
            </Show>
            <button class="login-button login-button--ghost" on:click=move |_| session.logout()>
                "Sign out"
            </button>
        </section>
    }
}
