//! GraphQL query root and resolver implementations

use async_graphql::{Context, Object, Result};
use sparcs_api_types::{Book, DateEcho, HealthRecord};

use crate::{clock, records::RecordsClient, store::BookStore};

/// Root query type exposing the three data sources
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Retrieve all books currently held in the local collection
    ///
    /// Order is not significant; the store performs an unordered scan-all.
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<Book>>> {
        let store = ctx.data::<BookStore>()?;
        Ok(Some(store.list().await))
    }

    /// Current wall-clock time in two string representations
    async fn date(&self) -> DateEcho {
        clock::now_echo()
    }

    /// Relay the remote health-discharge dataset
    ///
    /// Makes one outbound HTTP GET per invocation. Failures surface as a
    /// field-level error on `records`; sibling fields in the same request
    /// are unaffected.
    async fn records(&self, ctx: &Context<'_>) -> Result<Option<Vec<HealthRecord>>> {
        let client = ctx.data::<RecordsClient>()?;
        match client.fetch_records().await {
            Ok(records) => Ok(Some(records)),
            Err(e) => Err(async_graphql::Error::new(format!("Failed to fetch health records: {}", e))),
        }
    }

    /// Health check endpoint
    ///
    /// Returns "ok" to indicate the service is running
    async fn health(&self) -> &str {
        "ok"
    }

    /// API version information
    async fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }
}
