//! Axum router and server setup.
//! Used by: main.

use std::any::Any;

use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::INTERNAL_MESSAGE;
use crate::state::AppState;
use crate::{cors, handlers, logging};

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/metrics", get(handlers::metrics::snapshot))
        .route("/api/bmi", post(handlers::bmi::calculate));
    with_middleware(routes, state)
}

/// Last layer added runs first: panic catcher, origin gate, CORS headers, logger, router.
fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(from_fn_with_state(state.clone(), logging::log_request))
        .layer(state.config.allowed_origins.layer())
        .layer(from_fn_with_state(state.clone(), cors::enforce_origin))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_MESSAGE })),
    )
        .into_response()
}

pub async fn run(state: AppState) -> std::io::Result<()> {
    let addr = state.config.bind_addr();
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
