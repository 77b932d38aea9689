//! Server bootstrap - avvio di un servizio HTTP

use crate::core::config::{Config, Service};
use crate::core::db;
use crate::core::telemetry::init_tracing;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Starts one service and serves it until ctrl-c.
///
/// 1. Reads the configuration (`.env` included)
/// 2. Installs the tracing subscriber at `LOG_LEVEL`
/// 3. Connects the database, attaches the schema and migrates it
/// 4. Binds `host:port` and serves the service router
pub async fn start(service: Service) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env(service)?;
    init_tracing(&config.server.log_level);
    config.print_info();

    let pool = db::connect(&config.database).await.map_err(|e| {
        error!("Failed to connect to the database: {}", e);
        e
    })?;
    db::migrate(&pool, &config.database.schema, service).await?;

    let app = crate::router_for(service, pool, &config.database.schema);

    let listener = TcpListener::bind(config.server.address()).await?;
    info!(
        "{} service listening on http://{}",
        service.name(),
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} service stopped", service.name());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
