//! BMI Calculator API: computes Body Mass Index from height and weight.
//! Used by: binary entrypoint.

pub mod bmi;
pub mod config;
pub mod console;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod state;
pub mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    let config = config::Config::from_env()?;
    console::print_banner();
    console::print_startup(&config.bind_addr().to_string(), config.allowed_origins.origins());

    let state = state::build_state(config);
    tracing::info!("starting bmi-api on {}", state.config.bind_addr());

    server::run(state).await?;
    Ok(())
}
