//! Pass-through client for the remote health-discharge dataset
//!
//! One outbound GET per invocation, no caching, no conditional requests,
//! no retries. The response body is relayed as the `records` result after
//! the explicit lax-mapping step in [`HealthRecord::from_fields`].

use std::time::Duration;

use reqwest::StatusCode;
use sparcs_api_types::HealthRecord;
use thiserror::Error;
use tracing::debug;

/// NY SPARCS hospital inpatient discharge dataset
pub const DEFAULT_RECORDS_URL: &str = "https://health.data.ny.gov/resource/gnzp-ekau.json";

/// Records proxy errors
///
/// All of these surface as a field-level error on `records`; none of them
/// affect sibling fields or crash the process.
#[derive(Debug, Error)]
pub enum RecordsError {
    /// Transport-level failure (connect, timeout) or non-success handling
    #[error("records request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Remote endpoint answered with a non-2xx status
    #[error("records endpoint returned status {0}")]
    Status(StatusCode),

    /// Body was not valid JSON
    #[error("records payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Body was valid JSON but not an array of objects
    #[error("records payload is not a JSON array of objects")]
    Shape,
}

/// HTTP client for the remote dataset endpoint
#[derive(Clone)]
pub struct RecordsClient {
    http: reqwest::Client,
    url: String,
}

impl RecordsClient {
    /// Build a client with a bounded per-request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RecordsError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url: url.into() })
    }

    /// Fetch the dataset and shape it into the declared record type
    ///
    /// Suspends until the remote response completes or fails. Exactly one
    /// attempt is made per invocation.
    pub async fn fetch_records(&self) -> Result<Vec<HealthRecord>, RecordsError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecordsError::Status(status));
        }

        let body: serde_json::Value = serde_json::from_slice(&response.bytes().await?)?;
        let rows = body.as_array().ok_or(RecordsError::Shape)?;

        let records = rows
            .iter()
            .map(|row| row.as_object().map(HealthRecord::from_fields).ok_or(RecordsError::Shape))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = records.len(), "fetched health records");
        Ok(records)
    }
}
