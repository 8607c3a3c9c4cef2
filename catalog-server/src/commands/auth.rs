//! Bearer Token Guard

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::response::ApiError;
use crate::AppState;

/// Reject requests whose `Authorization: Bearer` token is not the admin token
pub async fn require_bearer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token.trim() == state.config.admin_token);

    if !authorized {
        log::warn!("Rejected unauthenticated {} {}", request.method(), request.uri().path());
        return ApiError::unauthorized().into_response();
    }
    next.run(request).await
}
