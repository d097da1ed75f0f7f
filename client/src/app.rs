//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::require_auth::RequireAuth;
use crate::config;
use crate::net::api::HttpAuthApi;
use crate::pages::{
    account::{ProfilePage, SettingsPage},
    dashboard::DashboardPage,
    landing::LandingPage,
    login::LoginPage,
    marketplace::{PersonalDetailPage, PersonalsPage},
    not_found::NotFoundPage,
    register::RegisterPage,
    schedule::{SchedulePage, StudentsPage},
    workouts::{MyWorkoutDetailPage, MyWorkoutsPage, NewWorkoutPage, WorkoutDetailPage, WorkoutsPage},
};
use crate::state::auth::AuthState;
use crate::state::session::{AppSession, SessionStore};
use crate::util::storage::BrowserTokenStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session for the app's lifetime, provides it and its state signal
/// via context, and kicks off hydration once the app is mounted in a browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let session: AppSession = SessionStore::new(
        HttpAuthApi::new(config::api_base()),
        BrowserTokenStore::new(config::TOKEN_STORAGE_KEY),
        auth,
    );
    provide_context(auth);
    provide_context(session.clone());

    // Effects only run in the browser, and this one tracks nothing, so
    // hydration happens exactly once per page load.
    Effect::new(move || {
        let session = session.clone();
        leptos::task::spawn_local(async move { session.hydrate().await });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/bricks.css"/>
        <Title text="Bricks"/>

        <Router>
            <NavBar/>
            <main class="page">
                <RequireAuth>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=LandingPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("personals") view=PersonalsPage/>
                        <Route path=(StaticSegment("personals"), ParamSegment("id")) view=PersonalDetailPage/>

                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("workouts") view=WorkoutsPage/>
                        <Route path=(StaticSegment("workouts"), StaticSegment("new")) view=NewWorkoutPage/>
                        <Route path=(StaticSegment("workouts"), ParamSegment("id")) view=WorkoutDetailPage/>
                        <Route path=StaticSegment("my-workouts") view=MyWorkoutsPage/>
                        <Route path=(StaticSegment("my-workouts"), ParamSegment("id")) view=MyWorkoutDetailPage/>
                        <Route path=StaticSegment("schedule") view=SchedulePage/>
                        <Route path=StaticSegment("students") view=StudentsPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                    </Routes>
                </RequireAuth>
            </main>
        </Router>
    }
}
