//! Quote domain: model, fetch/store seams and the request-scoped service.

pub mod client;
pub mod constants;
pub mod model;
pub mod service;
pub mod store;


pub use client::{AwesomeApiFetcher, UpstreamFetcher};
pub use constants::DEFAULT_REQUEST_TIMEOUT;
pub use model::{ExchangeRate, RateSummary, RecordId};
pub use service::{QuoteService, QuoteServiceTrait};
pub use store::RateStore;
