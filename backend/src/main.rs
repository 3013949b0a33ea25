//! Registration service entry-point: loads settings, wires ports and serves
//! the REST endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use registration_form::inbound::http::health::HealthState;
use server::{RegistrationSettings, ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = RegistrationSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    info!(
        bind_addr = %config.bind_addr(),
        phone_region = settings.phone_region(),
        remote_catalogue = settings.courses_url.is_some(),
        "starting registration service"
    );

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
