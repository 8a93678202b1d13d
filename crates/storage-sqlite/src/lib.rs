//! SQLite storage implementation for cotacao.
//!
//! This crate is the only place where Diesel dependencies exist. It provides:
//! - Database connection pooling and embedded migrations
//! - A single-writer actor that serializes all writes on one connection
//! - The [`rates::ExchangeRateRepository`] implementing the core `RateStore`
//!   seam, with its own fixed write window independent of the request
//!   deadline

pub mod db;
pub mod errors;
pub mod rates;
pub mod schema;

pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};
pub use db::write_actor::{spawn_writer, WriteHandle};
pub use errors::StorageError;
pub use rates::{ExchangeRateRepository, DEFAULT_WRITE_WINDOW};

// Re-export from cotacao-core for convenience
pub use cotacao_core::errors::{DatabaseError, Error, Result};
