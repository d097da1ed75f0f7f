use super::*;
use crate::net::types::UserType;

fn student() -> UserProfile {
    UserProfile {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@bricks.fit".to_owned(),
        user_type: UserType::Student,
        must_change_password_on_first_login: false,
        extra: serde_json::Map::new(),
    }
}

// =============================================================
// AuthState constructors
// =============================================================

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(state.user().is_none());
    assert!(state.token().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn signed_in_holds_token_and_user_and_is_settled() {
    let state = AuthState::signed_in("tok", student());
    assert!(!state.is_loading());
    assert_eq!(state.token(), Some("tok"));
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
    assert!(state.is_authenticated());
}

#[test]
fn signed_out_is_settled_and_empty() {
    let state = AuthState::signed_out();
    assert!(!state.is_loading());
    assert!(state.token().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_iff_user_present() {
    for state in [AuthState::default(), AuthState::signed_out(), AuthState::signed_in("t", student())] {
        assert_eq!(state.is_authenticated(), state.user().is_some());
        assert_eq!(state.token().is_some(), state.user().is_some());
    }
}
