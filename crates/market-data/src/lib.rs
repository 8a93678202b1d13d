//! Upstream market data access for the cotacao service.
//!
//! This crate owns the wire model of the AwesomeAPI currency endpoint and a
//! provider that performs exactly one bounded GET against it. It knows nothing
//! about persistence or HTTP serving; callers hand it a time budget and get a
//! decoded quote or a [`ProviderError`] back.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::ProviderError;
pub use models::{RateEnvelope, RateQuote};
pub use provider::awesome_api::{AwesomeApiProvider, DEFAULT_UPSTREAM_URL};
