//! REST client for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a transport error since these
//! endpoints are only meaningful in the browser, where the token lives.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Auth` carrying the server's `message`
//! (or a generic fallback). Anything that prevents reading a response,
//! including an undecodable 2xx body, becomes `ApiError::Transport`.
//! A single attempt is made per call; retries are the caller's decision.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

pub const ME_PATH: &str = "/api/auth/me";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

/// Shown when a rejection carries no usable `message`.
pub const DEFAULT_AUTH_ERROR: &str = "Authentication failed";

/// Failure of a single auth request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Auth { status: u16, message: String },
    /// No usable response: network failure or malformed body.
    #[error("network error: {0}")]
    Transport(String),
}

impl ApiError {
    /// True when the server rejected the request (as opposed to a network failure).
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}

/// Auth backend as seen by the session store.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Validate `token` and return its owner (`GET /api/auth/me`).
    async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError>;

    /// Exchange credentials for a token (`POST /api/auth/login`).
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Create an account and sign in (`POST /api/auth/register`).
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
}

/// `gloo-net` implementation of [`AuthApi`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpAuthApi {
    base: String,
}

impl HttpAuthApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        crate::config::endpoint(&self.base, path)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build the error for a non-2xx response from its raw body text.
#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_AUTH_ERROR.to_owned());
    ApiError::Auth { status, message }
}

#[cfg(feature = "hydrate")]
async fn read_auth_response(resp: gloo_net::http::Response) -> Result<AuthResponse, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(rejection(resp.status(), &body));
    }
    resp.json::<AuthResponse>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<AuthResponse, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_auth_response(resp).await
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(ME_PATH))
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(rejection(resp.status(), &body));
            }
            let body: super::types::MeResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.url(LOGIN_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.url(REGISTER_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}
