//! Wire models for the AwesomeAPI currency endpoint.

use serde::{Deserialize, Serialize};

/// One decoded USD-BRL quote, field names exactly as the upstream emits them.
///
/// All prices are decimal-as-text; they are carried as strings end to end and
/// never parsed into floats. `bid` is the only field the rest of the system
/// depends on; every other field may come back empty without failing the
/// decode, but the struct shape is fixed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub codein: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub high: String,
    #[serde(default)]
    pub low: String,
    #[serde(default, rename = "varBid")]
    pub var_bid: String,
    #[serde(default, rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    #[serde(default)]
    pub ask: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub create_date: String,
}

/// The upstream wraps the quote in a `{"USDBRL": {...}}` envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateEnvelope {
    #[serde(rename = "USDBRL")]
    pub usd_brl: RateQuote,
}
