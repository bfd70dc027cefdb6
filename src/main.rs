//! Lending Desk Server - Book Catalog and Loans
//!
//! REST API server over an in-memory book catalog.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lending_desk::{
    api,
    catalog::{Catalog, Clock, SystemClock},
    config::{AppConfig, LogFormat, LoggingConfig},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting Lending Desk v{}", env!("CARGO_PKG_VERSION"));

    // Build the catalog
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let catalog = if config.catalog.seed {
        Catalog::seeded(clock).context("Failed to seed catalog")?
    } else {
        Catalog::new(clock)
    };

    if catalog.is_empty() {
        tracing::warn!("Catalog is empty, add books through POST /api/v1/books");
    } else {
        tracing::info!(books = catalog.len(), "Catalog ready");
    }

    // Save server address before moving config
    let host: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid host address {}", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);

    let state = AppState::new(config, catalog);
    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("lending_desk={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
