//! Configuration for the SPARCS gateway server

use std::{net::SocketAddr, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::records::DEFAULT_RECORDS_URL;

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind the server to
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable GraphQL playground
    #[serde(default = "default_playground_enabled")]
    pub playground_enabled: bool,

    /// Path to the book collection persistence file
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// URL of the remote health-discharge dataset
    #[serde(default = "default_records_url")]
    pub records_url: String,

    /// Upper bound on a single outbound records request, in seconds
    #[serde(default = "default_records_timeout_secs")]
    pub records_timeout_secs: u64,

    /// CORS allowed origins (comma-separated list, or "*" for permissive)
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Optional API key for the external monitoring/telemetry integration
    ///
    /// Absent by default; when present it is attached to outbound telemetry.
    #[serde(default = "default_engine_api_key")]
    pub engine_api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            playground_enabled: default_playground_enabled(),
            database_path: default_database_path(),
            records_url: default_records_url(),
            records_timeout_secs: default_records_timeout_secs(),
            cors_allowed_origins: default_cors_allowed_origins(),
            engine_api_key: default_engine_api_key(),
        }
    }
}

fn default_bind_address() -> SocketAddr {
    let port: u16 = std::env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(4000);
    SocketAddr::from(([0, 0, 0, 0], port))
}

fn default_playground_enabled() -> bool {
    true
}

fn default_database_path() -> PathBuf {
    std::env::var("BOOKS_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("books.json"))
}

fn default_records_url() -> String {
    std::env::var("RECORDS_URL").unwrap_or_else(|_| DEFAULT_RECORDS_URL.to_string())
}

fn default_records_timeout_secs() -> u64 {
    30
}

fn default_cors_allowed_origins() -> Vec<String> {
    std::env::var("CORS_ALLOWED_ORIGINS")
        .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
        .unwrap_or_else(|_| vec!["*".to_string()])
}

fn default_engine_api_key() -> Option<String> {
    std::env::var("ENGINE_API_KEY").ok()
}
