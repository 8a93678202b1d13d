//! Request-scoped quote service.
//!
//! One inbound request walks a fixed sequence: attach the server-side
//! deadline, pre-flight check it, fetch under the remaining budget, hand the
//! summary back for the response, then persist best-effort under the store's
//! own window. No retries from any state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{error, info};

use super::client::UpstreamFetcher;
use super::model::ExchangeRate;
use super::store::RateStore;
use crate::errors::{Error, Result};

/// Contract for the quote request orchestration.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Attach the fixed server-side deadline to a request at receipt.
    fn request_deadline(&self) -> Instant;

    /// Pre-flight the deadline, then fetch the latest quote under the
    /// remaining budget.
    ///
    /// The pre-flight is a non-blocking check, not a wait: a request that
    /// arrives with its deadline already spent is rejected without touching
    /// the upstream.
    async fn latest_quote(&self, deadline: Instant) -> Result<ExchangeRate>;

    /// Persist one quote best-effort.
    ///
    /// Called after the response has been committed; failures are logged and
    /// swallowed so they can never alter the HTTP outcome. Success logs the
    /// generated record id.
    async fn record_quote(&self, rate: ExchangeRate);
}

/// Orchestrates fetcher and store for one request at a time.
///
/// Holds no cross-request mutable state; the injected store handle is the
/// only shared resource, and its driver serializes writes internally.
pub struct QuoteService {
    fetcher: Arc<dyn UpstreamFetcher>,
    store: Arc<dyn RateStore>,
    request_timeout: Duration,
}

impl QuoteService {
    pub fn new(
        fetcher: Arc<dyn UpstreamFetcher>,
        store: Arc<dyn RateStore>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            store,
            request_timeout,
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    fn request_deadline(&self) -> Instant {
        Instant::now() + self.request_timeout
    }

    async fn latest_quote(&self, deadline: Instant) -> Result<ExchangeRate> {
        let now = Instant::now();
        if now >= deadline {
            return Err(Error::DeadlineExceeded);
        }

        let budget = deadline - now;
        self.fetcher.fetch_latest(budget).await
    }

    async fn record_quote(&self, rate: ExchangeRate) {
        match self.store.persist(&rate).await {
            Ok(id) => info!("persisted quote bid={} as record {id}", rate.bid),
            Err(e) => error!("quote persistence failed, write lost: {e}"),
        }
    }
}
