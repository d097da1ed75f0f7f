use super::*;
use crate::net::types::{UserProfile, UserType};

fn signed_in(user_type: UserType) -> AuthState {
    AuthState::signed_in(
        "tok",
        UserProfile {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@bricks.fit".to_owned(),
            user_type,
            must_change_password_on_first_login: false,
            extra: serde_json::Map::new(),
        },
    )
}

const GUARDED: [&str; 10] = [
    "/dashboard",
    "/workouts",
    "/workouts/new",
    "/workouts/w-1",
    "/my-workouts",
    "/my-workouts/w-2",
    "/schedule",
    "/students",
    "/profile",
    "/settings",
];

const PUBLIC: [&str; 5] = ["/", "/login", "/register", "/personals", "/personals/p-9"];

// =============================================================
// AppRoute::parse / path
// =============================================================

#[test]
fn parse_matches_static_and_param_routes() {
    assert_eq!(AppRoute::parse("/"), AppRoute::Landing);
    assert_eq!(AppRoute::parse(""), AppRoute::Landing);
    assert_eq!(AppRoute::parse("/personals/p-9"), AppRoute::PersonalDetail("p-9".to_owned()));
    assert_eq!(AppRoute::parse("/my-workouts/w-2"), AppRoute::MyWorkoutDetail("w-2".to_owned()));
}

#[test]
fn parse_prefers_new_over_workout_id() {
    assert_eq!(AppRoute::parse("/workouts/new"), AppRoute::NewWorkout);
    assert_eq!(AppRoute::parse("/workouts/new-year"), AppRoute::WorkoutDetail("new-year".to_owned()));
}

#[test]
fn parse_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(AppRoute::parse("/dashboard/"), AppRoute::Dashboard);
    assert_eq!(AppRoute::parse("/login?next=/x"), AppRoute::Login);
    assert_eq!(AppRoute::parse("/settings#security"), AppRoute::Settings);
}

#[test]
fn parse_unknown_paths_as_not_found() {
    assert_eq!(AppRoute::parse("/admin"), AppRoute::NotFound("/admin".to_owned()));
    assert_eq!(AppRoute::parse("/workouts/1/edit"), AppRoute::NotFound("/workouts/1/edit".to_owned()));
}

#[test]
fn path_inverts_parse() {
    for path in GUARDED.iter().chain(PUBLIC.iter()) {
        assert_eq!(AppRoute::parse(path).path(), *path);
    }
}

#[test]
fn guarded_flags_match_route_table() {
    for path in GUARDED {
        assert!(AppRoute::parse(path).is_guarded(), "{path} should be guarded");
    }
    for path in PUBLIC {
        assert!(!AppRoute::parse(path).is_guarded(), "{path} should be public");
    }
    assert!(!AppRoute::parse("/nope").is_guarded());
}

// =============================================================
// dispatch
// =============================================================

#[test]
fn dashboard_while_loading_shows_loading() {
    assert_eq!(dispatch(&AppRoute::Dashboard, &AuthState::default()), RouteView::Loading);
}

#[test]
fn dashboard_when_signed_out_redirects_to_login() {
    assert_eq!(
        dispatch(&AppRoute::Dashboard, &AuthState::signed_out()),
        RouteView::Redirect(AppRoute::Login)
    );
}

#[test]
fn dashboard_branches_on_user_type() {
    assert_eq!(
        dispatch(&AppRoute::Dashboard, &signed_in(UserType::Personal)),
        RouteView::Dashboard(DashboardVariant::Trainer)
    );
    assert_eq!(
        dispatch(&AppRoute::Dashboard, &signed_in(UserType::Student)),
        RouteView::Dashboard(DashboardVariant::Student)
    );
}

#[test]
fn other_guarded_routes_render_when_granted() {
    let state = signed_in(UserType::Student);
    for path in GUARDED.iter().filter(|p| **p != "/dashboard") {
        let route = AppRoute::parse(path);
        assert_eq!(dispatch(&route, &state), RouteView::Page(route.clone()));
    }
}

#[test]
fn public_routes_render_in_every_auth_state() {
    for state in [AuthState::default(), AuthState::signed_out(), signed_in(UserType::Student)] {
        for path in PUBLIC {
            let route = AppRoute::parse(path);
            assert_eq!(dispatch(&route, &state), RouteView::Page(route.clone()));
        }
    }
}

#[test]
fn not_found_is_never_guarded() {
    let route = AppRoute::parse("/missing");
    assert_eq!(dispatch(&route, &AuthState::signed_out()), RouteView::Page(route.clone()));
}

#[test]
fn dashboard_with_unrecognized_role_shows_student_variant() {
    let user: UserProfile = serde_json::from_value(serde_json::json!({
        "id": "u-5",
        "name": "Ann",
        "email": "ann@bricks.fit",
        "userType": "admin"
    }))
    .unwrap();
    let state = AuthState::signed_in("tok", user);
    assert_eq!(
        dispatch_path("/dashboard", &state),
        RouteView::Dashboard(DashboardVariant::Student)
    );
}

// =============================================================
// dispatch_path / gate
// =============================================================

#[test]
fn settings_is_gated_in_every_unsettled_or_anonymous_state() {
    assert_eq!(dispatch_path("/settings", &AuthState::default()).gate(), Gate::Loading);
    let view = dispatch_path("/settings?tab=password", &AuthState::signed_out());
    assert_eq!(view.gate(), Gate::Redirecting);
    assert_eq!(view.redirect_target(), Some(&AppRoute::Login));
}

#[test]
fn personals_stays_open_while_signed_out() {
    let view = dispatch_path("/personals", &AuthState::signed_out());
    assert_eq!(view.gate(), Gate::Open);
    assert_eq!(view.redirect_target(), None);
    assert_eq!(dispatch_path("/personals/p-1", &AuthState::default()).gate(), Gate::Open);
}

#[test]
fn every_guarded_path_opens_once_signed_in() {
    let state = signed_in(UserType::Personal);
    for path in GUARDED {
        assert_eq!(dispatch_path(path, &state).gate(), Gate::Open, "{path}");
        assert_eq!(dispatch_path(path, &AuthState::signed_out()).gate(), Gate::Redirecting, "{path}");
    }
}
