use crate::{api, config::Config, state::AppState};
use axum_helpers::create_production_app;
use database::mongodb::connect_from_config_with_retry;
use eyre::{Result, WrapErr};
use std::time::Duration;
use tracing::info;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Connects to MongoDB, then serves until SIGINT/SIGTERM.
///
/// No listener is bound while the database is unreachable; once the retries
/// are exhausted the error is returned to `main`.
pub async fn run(config: Config) -> Result<()> {
    info!(database = %config.mongo.database(), "Connecting to MongoDB");
    let mongo = connect_from_config_with_retry(&config.mongo, None)
        .await
        .wrap_err("Failed to connect to MongoDB")?;

    let state = AppState {
        config: config.clone(),
        mongo: mongo.clone(),
    };

    let api_routes = api::routes(&state).merge(api::ready_router(state));
    let router = api::app(&config, api_routes);

    info!(
        static_dir = %config.static_dir.display(),
        environment = ?config.environment,
        "Starting {} v{}",
        config.app.name,
        config.app.version
    );

    let cleanup = async move {
        info!("Closing MongoDB connections");
        mongo.shutdown().await;
    };

    create_production_app(router, &config.server, SHUTDOWN_TIMEOUT, cleanup)
        .await
        .wrap_err("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}
