//! Fetch seam over the upstream market data provider.

use std::time::Duration;

use async_trait::async_trait;

use cotacao_market_data::AwesomeApiProvider;

use super::model::ExchangeRate;
use crate::errors::Result;

/// Contract for fetching the latest quote under a caller-supplied budget.
///
/// The budget is the remaining slice of the request deadline; the fetcher
/// performs exactly one upstream call and reports every failure the same way.
#[async_trait]
pub trait UpstreamFetcher: Send + Sync {
    async fn fetch_latest(&self, budget: Duration) -> Result<ExchangeRate>;
}

/// Adapter from [`AwesomeApiProvider`] to the service-facing fetcher trait.
pub struct AwesomeApiFetcher {
    provider: AwesomeApiProvider,
}

impl AwesomeApiFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            provider: AwesomeApiProvider::new(url),
        }
    }
}

#[async_trait]
impl UpstreamFetcher for AwesomeApiFetcher {
    async fn fetch_latest(&self, budget: Duration) -> Result<ExchangeRate> {
        let quote = self.provider.latest(budget).await?;
        Ok(ExchangeRate::from(quote))
    }
}
