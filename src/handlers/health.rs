//! Root running check and health probe.
//! Used by: server.

use axum::http::StatusCode;

pub const RUNNING_MESSAGE: &str = "BMI Calculator API is running";

pub async fn root() -> &'static str {
    RUNNING_MESSAGE
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
