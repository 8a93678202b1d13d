//! Persistence seam for decoded quotes.

use async_trait::async_trait;

use super::model::{ExchangeRate, RecordId};
use crate::errors::Result;

/// Contract for persisting a decoded quote.
///
/// Implementations bound the write with their own fixed window, computed from
/// the moment the persist starts — deliberately independent of the request
/// deadline. One insert per call; records are never updated or read back by
/// this system.
#[async_trait]
pub trait RateStore: Send + Sync {
    /// Persist one quote, returning the generated identity.
    async fn persist(&self, rate: &ExchangeRate) -> Result<RecordId>;
}
