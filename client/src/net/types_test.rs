use super::*;

fn trainer_json() -> serde_json::Value {
    serde_json::json!({
        "id": "u-1",
        "name": "Rita",
        "email": "rita@bricks.fit",
        "userType": "personal",
        "mustChangePasswordOnFirstLogin": true,
        "cref": "012345-G/SP",
        "specialties": ["strength", "mobility"]
    })
}

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_decodes_camel_case_fields() {
    let user: UserProfile = serde_json::from_value(trainer_json()).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.user_type, UserType::Personal);
    assert!(user.must_change_password_on_first_login);
}

#[test]
fn user_profile_keeps_role_specific_fields() {
    let user: UserProfile = serde_json::from_value(trainer_json()).unwrap();
    assert_eq!(user.extra.get("cref"), Some(&serde_json::json!("012345-G/SP")));
    assert_eq!(user.extra.get("specialties"), Some(&serde_json::json!(["strength", "mobility"])));
    assert!(!user.extra.contains_key("userType"));
}

#[test]
fn user_profile_defaults_must_change_password_to_false() {
    let user: UserProfile = serde_json::from_value(serde_json::json!({
        "id": "u-2",
        "name": "Sam",
        "email": "sam@bricks.fit",
        "userType": "student"
    }))
    .unwrap();
    assert!(!user.must_change_password_on_first_login);
    assert!(user.extra.is_empty());
}

#[test]
fn user_profile_decodes_unknown_role_as_student() {
    let user: UserProfile = serde_json::from_value(serde_json::json!({
        "id": "u-3",
        "name": "Ann",
        "email": "ann@bricks.fit",
        "userType": "admin"
    }))
    .unwrap();
    assert_eq!(user.user_type, UserType::Student);
}

#[test]
fn auth_response_with_unknown_role_still_decodes() {
    let body = r#"{"token":"t","user":{"id":"u-4","name":"Ann","email":"ann@bricks.fit","userType":"admin"}}"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.token, "t");
    assert_eq!(resp.user.user_type, UserType::Student);
}

// =============================================================
// UserType
// =============================================================

#[test]
fn user_type_parse_matches_wire_values() {
    assert_eq!(UserType::parse("personal"), Some(UserType::Personal));
    assert_eq!(UserType::parse("student"), Some(UserType::Student));
    assert_eq!(UserType::parse("Personal"), None);
    assert_eq!(UserType::Student.as_str(), "student");
}

// =============================================================
// Requests / responses
// =============================================================

#[test]
fn register_request_serializes_user_type_in_camel_case() {
    let req = RegisterRequest {
        name: "Sam".to_owned(),
        email: "sam@bricks.fit".to_owned(),
        password: "hunter22".to_owned(),
        user_type: UserType::Student,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "name": "Sam",
            "email": "sam@bricks.fit",
            "password": "hunter22",
            "userType": "student"
        })
    );
}

#[test]
fn auth_response_decodes_token_and_user() {
    let body = serde_json::json!({ "token": "tok-1", "user": trainer_json() });
    let resp: AuthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.token, "tok-1");
    assert_eq!(resp.user.name, "Rita");
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}
