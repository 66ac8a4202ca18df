//! Shared application state. Built once before the server starts listening.

use std::sync::Arc;

use crate::config::Config;
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub config: Config,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state(config: Config) -> AppState {
    Arc::new(AppStateInner {
        config,
        metrics: Metrics::new(),
    })
}

#[cfg(test)]
pub fn build_test_state() -> AppState {
    use crate::cors::AllowList;

    let allowed_origins = AllowList::new(crate::config::ALLOWED_ORIGINS)
        .expect("built-in origins are valid");
    build_state(Config {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        allowed_origins,
    })
}
