//! Request logger middleware and subscriber setup.
//! Used by: main, server.

use std::io::Write;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{SecondsFormat, Utc};
use tracing_subscriber::EnvFilter;

use crate::console;
use crate::state::AppState;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn request_target(req: &Request) -> &str {
    req.uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.uri().path())
}

fn write_request_line<W: Write>(out: &mut W, req: &Request) -> std::io::Result<()> {
    console::write_request(out, &timestamp(), req.method().as_str(), request_target(req))
}

/// Emits one line per request before dispatch. Never alters the request or response.
pub async fn log_request(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let _ = write_request_line(&mut std::io::stdout().lock(), &req);

    let n = state.metrics.record_request();
    tracing::debug!(count = n, method = %req.method(), path = %request_target(&req), "dispatching");
    next.run(req).await
}
