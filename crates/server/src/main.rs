//! StreamNexus HTTP server.
//!
//! Loads the catalog once, then serves recommendations and analytics.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use catalog::Catalog;
use server::{create_router, Config, StreamService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    info!("Starting StreamNexus server with {:?}", config);

    let catalog = match Catalog::load_from_file(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) if config.catalog_fallback_empty => {
            warn!("Catalog failed to load ({}), serving an empty catalog", e);
            Catalog::empty()
        }
        Err(e) => {
            error!("Catalog failed to load: {}", e);
            return Err(e).context("Failed to load movie catalog");
        }
    };
    info!("Catalog ready with {} movies", catalog.len());

    let service = StreamService::new(Arc::new(catalog)).with_default_limit(config.recommend_limit);
    let app = create_router(service);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
