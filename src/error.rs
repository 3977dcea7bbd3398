//! Error types for dataverse-export
//!
//! One variant per failure class the pipeline can hit: configuration,
//! authorization, transport, API status, serialization, and filesystem.
//! Every error aborts the current operation and propagates upward; there is
//! no retry and no per-dataset isolation.

use thiserror::Error;

/// Result type alias for dataverse-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for dataverse-export
///
/// Each variant includes enough context to identify the failing operation
/// and, for export calls, the dataset involved.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// An authenticated call was requested but no API token is configured
    #[error("API token required but not configured for request to {url}")]
    Authorization {
        /// The URL the authenticated request was aimed at
        url: String,
    },

    /// Could not establish a connection to the API
    #[error("could not establish connection to api {url}")]
    Connection {
        /// The URL the connection attempt targeted
        url: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// An API call returned a status outside the success range [200, 299]
    #[error("API call {operation} failed with status {status}")]
    ApiCall {
        /// The query path of the failing call (e.g., "dataverses/root/contents")
        operation: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// An export call failed for a specific dataset
    #[error("API call failed, cannot export dataset {persistent_id} (status {status})")]
    ExportFailed {
        /// The persistent identifier of the dataset that could not be exported
        persistent_id: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// The API returned a body this client cannot make sense of
    #[error("unexpected response from {operation}: {message}")]
    UnexpectedResponse {
        /// The query path of the call that produced the body
        operation: String,
        /// What was wrong with the body
        message: String,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
