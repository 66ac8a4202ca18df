//! Unified error types for the BMI API.
//! Used by: config, cors, bmi, handlers, server.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("Not allowed by CORS")]
    OriginNotAllowed,

    #[error("computed BMI is not finite (height: {height}, weight: {weight})")]
    NonFiniteResult { height: f64, weight: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidBody(rejection.body_text())
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::OriginNotAllowed => StatusCode::FORBIDDEN,
            Error::NonFiniteResult { .. } | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
