//! Core domain logic for the cotacao service.
//!
//! This crate is storage- and transport-agnostic: it defines the domain
//! model, the error taxonomy, the `UpstreamFetcher`/`RateStore` seams, and
//! the [`quotes::QuoteService`] that orchestrates one request under the
//! server-side deadline. Diesel lives in `cotacao-storage-sqlite`; axum lives
//! in the server app.

pub mod errors;
pub mod quotes;

pub use errors::{DatabaseError, Error, Result};
