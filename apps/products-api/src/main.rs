//! Products API - in-memory product catalog over REST

use axum_helpers::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);

    let router = create_router::<openapi::ApiDoc>(api::routes(&state));

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        "Starting Products API on {}",
        state.config.server.address()
    );

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
