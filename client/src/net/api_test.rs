use super::*;

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn http_api_builds_urls_from_base() {
    assert_eq!(HttpAuthApi::new("").url(ME_PATH), "/api/auth/me");
    assert_eq!(
        HttpAuthApi::new("https://api.bricks.fit").url(LOGIN_PATH),
        "https://api.bricks.fit/api/auth/login"
    );
}

#[test]
fn rejection_uses_server_message() {
    let err = rejection(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(err, ApiError::Auth { status: 401, message: "Invalid credentials".to_owned() });
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn rejection_falls_back_when_message_missing_or_blank() {
    assert_eq!(rejection(400, "{}").to_string(), DEFAULT_AUTH_ERROR);
    assert_eq!(rejection(400, r#"{"message":"   "}"#).to_string(), DEFAULT_AUTH_ERROR);
}

#[test]
fn rejection_falls_back_on_non_json_body() {
    let err = rejection(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Auth { status: 502, message: DEFAULT_AUTH_ERROR.to_owned() });
}

#[test]
fn transport_error_is_not_auth() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert!(!err.is_auth());
    assert_eq!(err.to_string(), "network error: connection refused");
    assert!(rejection(401, "").is_auth());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_fail_as_transport() {
    let api = HttpAuthApi::new("");
    let err = futures::executor::block_on(api.current_user("tok")).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
