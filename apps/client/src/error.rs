use thiserror::Error;

/// Per-step failures of the one-shot client flow.
///
/// Each variant names the step that failed so the operator report is
/// self-explanatory.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Quote request timed out after {0}ms")]
    Timeout(u64),

    #[error("Failed to reach the quote service: {0}")]
    Request(reqwest::Error),

    #[error("Quote service answered with status {0}")]
    Status(u16),

    #[error("Failed to decode the quote response: {0}")]
    Decode(String),

    #[error("Failed to write the artifact: {0}")]
    Io(#[from] std::io::Error),
}
