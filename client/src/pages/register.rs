//! Registration page: creates a trainer or student account and signs in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserType;
use crate::routes::AppRoute;
use crate::state::session::AppSession;
use crate::util::auth::post_login_destination;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Validated register form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    user_type: &str,
) -> Result<RegisterInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    let Some(user_type) = UserType::parse(user_type) else {
        return Err("Choose trainer or student.");
    };
    Ok(RegisterInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        user_type,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let user_type = RwSignal::new(UserType::Student.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let redirect_to = RwSignal::new(None::<AppRoute>);

    Effect::new(move || {
        if let Some(route) = redirect_to.get() {
            redirect_to.set(None);
            navigate(&route.path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(&name.get(), &email.get(), &password.get(), &user_type.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = session
                .register(&input.name, &input.email, &input.password, input.user_type)
                .await;
            match result {
                Ok(state) => {
                    let destination = state.user().map_or(AppRoute::Dashboard, post_login_destination);
                    info.set(String::new());
                    redirect_to.set(Some(destination));
                }
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Join Bricks"</h1>
                <p class="login-card__subtitle">"Train with the best personals, or find your students"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (6+ characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || user_type.get()
                        on:change=move |ev| user_type.set(event_target_value(&ev))
                    >
                        <option value=UserType::Student.as_str()>"I'm a student"</option>
                        <option value=UserType::Personal.as_str()>"I'm a personal trainer"</option>
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already have an account? "
                    <a href=AppRoute::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
