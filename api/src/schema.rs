//! GraphQL schema builder for the SPARCS gateway

use async_graphql::{EmptySubscription, Schema};

use crate::{mutation::MutationRoot, query::QueryRoot, records::RecordsClient, store::BookStore};

/// Executable schema type for the gateway
pub type GatewaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the async-graphql schema with its resolver dependencies
///
/// The book store and records client are injected as context data here,
/// never reached through globals, so tests can supply their own instances.
/// Depth and complexity limits guard the executor against pathological
/// documents.
pub fn build_schema(store: BookStore, records: RecordsClient) -> GatewaySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .limit_depth(10)
        .limit_complexity(100)
        .data(store)
        .data(records)
        .finish()
}

/// Export the GraphQL schema to SDL (Schema Definition Language) format
pub fn export_schema_sdl(store: BookStore, records: RecordsClient) -> String {
    build_schema(store, records).sdl()
}
