//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Per-record validation failures during catalog load are recovered locally
/// (logged, record skipped) and never surface through this taxonomy. Every
/// other failure propagates unchanged from the store through the service to
/// the caller; only the HTTP layer translates these into status codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Backing data source is missing or cannot be parsed. Fatal at startup.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Source parses but violates the expected top-level shape. Fatal at startup.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Unexpected failure surfaced while querying the index.
    #[error("store failure: {0}")]
    StoreFailure(String),

    /// Caller-supplied batch request is malformed (empty or duplicate ids).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A requested identifier has no corresponding record. The message names
    /// the offending identifier(s).
    #[error("{0}")]
    NotFound(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    pub fn store_failure(msg: impl Into<String>) -> Self {
        Self::StoreFailure(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
