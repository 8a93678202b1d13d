//! Error types for upstream quote fetching.

use thiserror::Error;

/// Errors that can occur while fetching a quote from the upstream provider.
///
/// Callers treat every variant identically — one failed fetch is one failed
/// request, with no retries. The split exists for logging and tests.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request did not complete within the caller's budget.
    #[error("Upstream request timed out after {budget_ms}ms")]
    Timeout { budget_ms: u64 },

    /// The provider answered with a non-success status.
    #[error("Upstream returned status {status}")]
    Status { status: u16 },

    /// The body could not be decoded into the expected envelope.
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),

    /// A transport-level error occurred before a response was read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
