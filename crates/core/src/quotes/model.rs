//! Domain model for exchange-rate quotes.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use cotacao_market_data::RateQuote;

/// Identity of a persisted record (SQLite rowid).
pub type RecordId = i64;

/// A decoded exchange-rate record from the upstream provider.
///
/// All price fields are decimal-as-text to avoid floating-point
/// representation games; `timestamp` is the upstream-supplied string epoch.
/// Held in memory for the duration of one request only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub code: String,
    pub counter_code: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

impl From<RateQuote> for ExchangeRate {
    fn from(quote: RateQuote) -> Self {
        // Upstream sometimes omits create_date; default to ingestion time.
        let create_date = if quote.create_date.is_empty() {
            Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
        } else {
            quote.create_date
        };

        Self {
            code: quote.code,
            counter_code: quote.codein,
            name: quote.name,
            high: quote.high,
            low: quote.low,
            var_bid: quote.var_bid,
            pct_change: quote.pct_change,
            bid: quote.bid,
            ask: quote.ask,
            timestamp: quote.timestamp,
            create_date,
        }
    }
}

/// The only shape exposed to the external client: `{"bid": "<string>"}`.
///
/// Derived from [`ExchangeRate`], never persisted separately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateSummary {
    pub bid: String,
}

impl From<&ExchangeRate> for RateSummary {
    fn from(rate: &ExchangeRate) -> Self {
        Self {
            bid: rate.bid.clone(),
        }
    }
}
