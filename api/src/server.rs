//! Axum HTTP server configuration with GraphQL support

use std::sync::Arc;

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::ApiConfig,
    records::RecordsClient,
    schema::{GatewaySchema, build_schema},
    store::BookStore,
};

/// Health check response for liveness probe
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: &'static str,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: Arc<GatewaySchema>,
    pub playground_enabled: bool,
}

/// Build the Axum application router
pub fn build_app(store: BookStore, records: RecordsClient, config: ApiConfig) -> Router {
    let schema = build_schema(store, records);

    let app_state = AppState {
        schema: Arc::new(schema),
        playground_enabled: config.playground_enabled,
    };

    // Configure CORS based on allowed origins
    let cors_layer = if config.cors_allowed_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let allowed_origins: Vec<_> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    };

    Router::new()
        // GraphQL endpoint (queries and mutations)
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        // Liveness probe
        .route("/healthz", get(healthz_handler))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// GraphQL query/mutation handler
///
/// Validation happens inside the schema executor: a request naming an
/// undeclared field or mis-shaped arguments is rejected with no `data`
/// before any resolver runs, while a single resolver failure is attached
/// to its field's path and sibling fields still return their data.
async fn graphql_handler(State(state): State<AppState>, Json(request): Json<Value>) -> Response {
    // Parse the GraphQL request
    let request = match serde_json::from_value::<async_graphql::Request>(request) {
        Ok(req) => req,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "errors": [{
                        "message": format!("Invalid GraphQL request: {}", e)
                    }]
                })),
            )
                .into_response();
        }
    };

    let response = state.schema.execute(request).await;

    // Serialize and return the response
    Json(serde_json::to_value(response).unwrap_or_else(|_| {
        serde_json::json!({
            "errors": [{"message": "Failed to serialize response"}]
        })
    }))
    .into_response()
}

/// GraphQL Playground UI (only enabled if playground_enabled config is true)
async fn graphql_playground(State(state): State<AppState>) -> impl IntoResponse {
    if state.playground_enabled {
        Html(playground_source(GraphQLPlaygroundConfig::new("/graphql"))).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            "GraphQL Playground is disabled. Use POST /graphql for queries.",
        )
            .into_response()
    }
}

/// Liveness probe endpoint - minimal check that process is alive
async fn healthz_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
