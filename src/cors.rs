//! Origin allow-list: a gate that rejects foreign origins before dispatch,
//! plus the tower-http layer that writes CORS headers for admitted ones.
//! Used by: config, server.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::error::{Error, Result};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    origins: Vec<HeaderValue>,
}

impl AllowList {
    pub fn new<I, S>(origins: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origins = origins
            .into_iter()
            .map(|o| {
                HeaderValue::from_str(o.as_ref())
                    .map_err(|_| Error::Config(format!("invalid CORS origin: {:?}", o.as_ref())))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { origins })
    }

    /// Requests without an `Origin` header (curl, mobile apps, server-to-server) are allowed.
    pub fn check(&self, origin: Option<&HeaderValue>) -> Decision {
        match origin {
            None => Decision::Allow,
            Some(o) if self.origins.contains(o) => Decision::Allow,
            Some(_) => Decision::Deny,
        }
    }

    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().filter_map(|o| o.to_str().ok())
    }

    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.origins.clone()))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}

pub async fn enforce_origin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let decision = state.config.allowed_origins.check(req.headers().get(ORIGIN));
    match decision {
        Decision::Allow => next.run(req).await,
        Decision::Deny => {
            let origin = req
                .headers()
                .get(ORIGIN)
                .map(|o| String::from_utf8_lossy(o.as_bytes()).into_owned())
                .unwrap_or_default();
            tracing::warn!(origin = %origin, method = %req.method(), path = %req.uri().path(), "origin rejected");
            state.metrics.record_cors_denied();
            Error::OriginNotAllowed.into_response()
        }
    }
}
