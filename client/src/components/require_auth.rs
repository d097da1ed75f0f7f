//! Route guard wrapped around the app's `<Routes>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation passes through here: the current path and `AuthState`
//! go through `routes::dispatch_path`, and only an open view lets the router
//! render a page. Public paths open in every auth state.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{Gate, RouteView, dispatch_path};
use crate::state::auth::AuthState;
use crate::util::auth::install_redirect;

/// Placeholder shown while the session is still hydrating.
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="guard-loading" role="status" aria-live="polite">
            <span class="guard-loading__spinner"></span>
            <span>"Loading..."</span>
        </div>
    }
}

/// Renders `children` (the route outlet) only when the current location is
/// allowed under the committed session.
///
/// Pending shows [`LoadingView`]; Denied navigates to `/login` (the requested
/// path is not remembered).
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let route_view = Memo::new(move |_| {
        let path = location.pathname.get();
        auth.with(|state| dispatch_path(&path, state))
    });
    // Navigating between open pages must not rebuild the outlet.
    let gate = Memo::new(move |_| route_view.with(RouteView::gate));

    install_redirect(route_view, use_navigate());

    move || match gate.get() {
        Gate::Loading => view! { <LoadingView/> }.into_any(),
        Gate::Redirecting => view! { <p class="guard-redirect">"Redirecting to sign in..."</p> }.into_any(),
        Gate::Open => children().into_any(),
    }
}
