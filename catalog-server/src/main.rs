//! catalog-server — restaurant catalog console backend
//!
//! Single service that:
//! - Serves the browse/search/map views over the restaurant catalog
//! - Handles add/update forms and archive/restore/hard-delete operations
//! - Manages reviews (add, delete)
//!
//! The relational store is the only external collaborator; it is reached
//! through a process-scoped connection pool acquired at startup.

mod api;
mod config;
mod db;
mod error;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting catalog-server (env: {})", config.environment);

    // Connect to the store and run the schema migration. A failure here is
    // terminal: there is nothing to serve without the catalog.
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("catalog-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
