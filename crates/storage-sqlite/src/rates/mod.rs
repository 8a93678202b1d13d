pub mod model;
pub mod repository;

pub use model::{ExchangeRateRow, NewExchangeRateRow};
pub use repository::{ExchangeRateRepository, DEFAULT_WRITE_WINDOW};
