//! Same-origin forwarder for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls relative `/api/...` paths. The host relays them
//! to `BRICKS_BACKEND_URL` so the client needs no CORS setup or baked-in
//! backend origin.
//!
//! ERROR HANDLING
//! ==============
//! Backend responses, including 4xx/5xx, pass through untouched. Only a
//! failure to reach the backend is answered locally: 502 with a JSON
//! `message`, the same shape the client already reads from API errors.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Request headers relayed to the backend.
fn forwarded_headers() -> [HeaderName; 3] {
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]
}

pub(crate) fn upstream_url(backend: &str, path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{backend}/api/{path}?{q}"),
        None => format!("{backend}/api/{path}"),
    }
}

fn bad_gateway(error: &reqwest::Error) -> Response {
    tracing::warn!(%error, "api proxy: backend unreachable");
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "message": "Service unavailable, try again shortly." })),
    )
        .into_response()
}

/// `ANY /api/{*path}`: relay to the backend and return its response.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.config.backend_url, &path, query.as_deref());
    tracing::debug!(%method, %url, "api proxy");

    let mut request = state.http.request(method, &url).body(body);
    for name in forwarded_headers() {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => return bad_gateway(&e),
    };
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => return bad_gateway(&e),
    };

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}
