//! sparcs-api - GraphQL gateway for a local book collection, a clock echo,
//! and the NY SPARCS health-discharge dataset
//!
//! This crate provides a GraphQL API server built with Axum and
//! async-graphql. Three unrelated data sources hang off one schema: an
//! in-process book store with write-through JSON persistence, a wall-clock
//! echo, and a pass-through proxy to a remote public dataset.

pub mod clock;
pub mod config;
pub mod errors;
pub mod mutation;
pub mod query;
pub mod records;
pub mod schema;
pub mod server;
pub mod store;

use std::time::Duration;

use axum::serve;
use config::ApiConfig;
use errors::ApiResult;
use records::RecordsClient;
use store::BookStore;
use tokio::net::TcpListener;
use tracing::info;

/// Start the API server
///
/// Loads the persisted book collection, builds the application, binds the
/// configured address, and serves until the process is terminated.
pub async fn start_server(config: ApiConfig) -> ApiResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sparcs_api=info,tower_http=debug".into()),
        )
        .init();

    info!("Starting SPARCS gateway on {}", config.bind_address);
    info!("Book store: {}", config.database_path.display());
    info!("Records endpoint: {}", config.records_url);
    if config.engine_api_key.is_some() {
        info!("Telemetry API key configured; attaching to outbound telemetry");
    }

    // Load persisted books back into memory before serving any queries
    let store = BookStore::load(&config.database_path).await?;

    let records = RecordsClient::new(&config.records_url, Duration::from_secs(config.records_timeout_secs))?;

    let app = server::build_app(store, records, config.clone());

    let listener = TcpListener::bind(config.bind_address).await?;

    info!("GraphQL endpoint: http://{}/graphql", config.bind_address);
    if config.playground_enabled {
        info!("GraphQL Playground: http://{}/graphql", config.bind_address);
    }
    info!("Health check: http://{}/healthz", config.bind_address);

    serve(listener, app).await?;

    Ok(())
}
