//! Error types for the SPARCS gateway
//!
//! Server-level errors (`ApiError`) cover startup and infrastructure
//! failures and are fatal before the server accepts traffic. Resolver
//! failures never use these types; they are rendered into the GraphQL
//! response's error list at the query-processor boundary.

use thiserror::Error;

use crate::{records::RecordsError, store::StoreError};

/// API-related errors for server infrastructure
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server binding or other I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Book store error (startup load or persistence flush)
    #[error("Book store error: {0}")]
    StoreError(#[from] StoreError),

    /// Records client construction or fetch error
    #[error("Records client error: {0}")]
    RecordsError(#[from] RecordsError),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
