//! Optional bearer-token guard for the API.
//!
//! When `API_TOKEN` is configured every `/api/*` request must carry
//! `Authorization: Bearer <token>`; without it the guard passes everything
//! through.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use super::error::ApiError;
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = raw.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Middleware rejecting requests whose bearer token does not match `API_TOKEN`.
pub async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Result<Response, ApiError> {
    if let Some(expected) = state.config.api_token.as_deref() {
        if bearer_token(request.headers()) != Some(expected) {
            warn!(path = %request.uri().path(), "rejected request without valid bearer token");
            return Err(ApiError::Unauthorized);
        }
    }
    Ok(next.run(request).await)
}
