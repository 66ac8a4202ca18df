//! HTTP handler modules.
//! Used by: server.

pub mod bmi;
pub mod health;
pub mod metrics;
