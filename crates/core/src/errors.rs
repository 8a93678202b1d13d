//! Core error types for the cotacao service.
//!
//! Database-specific errors (Diesel, r2d2) are converted to [`DatabaseError`]
//! by the storage layer, keeping this crate database-agnostic.

use thiserror::Error;

use cotacao_market_data::ProviderError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the quote service.
#[derive(Error, Debug)]
pub enum Error {
    /// The request-level deadline elapsed, either before the fetch started
    /// (pre-flight) or while waiting on the upstream call.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    /// The upstream quote provider failed: transport error, bad status,
    /// undecodable body or its own timeout. All handled identically.
    #[error("Upstream quote provider failed: {0}")]
    Upstream(#[from] ProviderError),

    /// A persistence operation failed, including its own write-window expiry.
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),
}

/// Database-agnostic error type for storage operations.
///
/// All details are strings so the storage layer can fold Diesel/r2d2 errors
/// into this shape at its boundary.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// The write did not complete within the store's own fixed window.
    #[error("Database write timed out after {0}ms")]
    Timeout(u64),

    #[error("Internal database error: {0}")]
    Internal(String),
}
