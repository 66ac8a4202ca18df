//! `GET /metrics`: live counter snapshot, never cached by intermediaries.
//! Used by: server.

use axum::extract::State;
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

pub async fn snapshot(State(state): State<AppState>) -> Response {
    let mut response = Json(state.metrics.snapshot()).into_response();
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
