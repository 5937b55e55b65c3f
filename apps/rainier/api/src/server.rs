//! HTTP server initialization and lifecycle
//!
//! - Tracing initialization (JSON in production, pretty otherwise)
//! - In-memory store and service construction
//! - Router assembly: `/api/...`, `/health`, Swagger UI at `/docs`
//! - Serving with graceful shutdown on SIGINT/SIGTERM

use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_vectordb::{
    ApiDoc, InMemoryCollectionRepository, InMemoryDatabaseRepository, InMemoryPointRepository,
    VectorDbService, handlers,
};
use eyre::{Result, WrapErr};
use tracing::info;

use crate::config::Config;

/// Build the full application router for `config`.
pub fn app(config: &Config) -> Router {
    let service = VectorDbService::new(
        InMemoryDatabaseRepository::new(),
        InMemoryCollectionRepository::new(),
        InMemoryPointRepository::new(),
    );

    let span = tracing::info_span!("vectordb", app = config.app.name);
    let api_routes = handlers::router(service, span);

    create_router::<ApiDoc>(api_routes).merge(health_router(config.app))
}

/// Run the HTTP server
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the listener cannot
/// bind, or the server fails while running.
pub async fn run() -> Result<()> {
    install_color_eyre();

    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    init_tracing(&config.environment, &config.log);

    info!(
        name = config.app.name,
        version = config.app.version,
        address = %config.server.address(),
        "Starting vector database API"
    );

    create_app(app(&config), &config.server)
        .await
        .wrap_err("Server error")?;

    info!("Rainier API shutdown complete");
    Ok(())
}
