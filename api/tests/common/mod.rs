//! Shared test environment setup for gateway integration tests

use std::{path::PathBuf, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use sparcs_api::{config::ApiConfig, records::RecordsClient, server::build_app, store::BookStore};
use tempfile::TempDir;
use tower::ServiceExt;

/// A records URL nothing listens on, for failure-path tests
pub const UNREACHABLE_RECORDS_URL: &str = "http://127.0.0.1:1/records";

pub struct TestContext {
    pub app: Router,
    pub config: ApiConfig,
    pub db_path: PathBuf,
    // Held so the store directory outlives the test
    _data_dir: TempDir,
}

/// Build a gateway over a fresh temporary book store and the given
/// records endpoint
pub async fn setup_gateway(records_url: &str) -> anyhow::Result<TestContext> {
    let data_dir = tempfile::tempdir()?;
    let db_path = data_dir.path().join("books.json");

    let config = ApiConfig {
        database_path: db_path.clone(),
        records_url: records_url.to_string(),
        records_timeout_secs: 2,
        ..ApiConfig::default()
    };

    let app = build_gateway_app(&config).await?;

    Ok(TestContext {
        app,
        config,
        db_path,
        _data_dir: data_dir,
    })
}

/// Build an application router from a config, loading the store fresh
///
/// Calling this twice with the same config simulates a process restart
/// over the same persistence file.
pub async fn build_gateway_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let store = BookStore::load(&config.database_path).await?;
    let records = RecordsClient::new(&config.records_url, Duration::from_secs(config.records_timeout_secs))?;
    Ok(build_app(store, records, config.clone()))
}

/// POST a GraphQL document and return status plus parsed JSON body
pub async fn graphql(app: Router, query: &str) -> (StatusCode, serde_json::Value) {
    post_graphql_body(app, serde_json::json!({ "query": query })).await
}

/// POST an arbitrary JSON body to /graphql
pub async fn post_graphql_body(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serializable body")))
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Failed to execute request");
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("Failed to parse JSON");

    (status, json)
}
