//! Database models for persisted exchange rates.

use diesel::prelude::*;

use cotacao_core::quotes::ExchangeRate;

/// Insert model for one persisted quote.
///
/// The upstream timestamp arrives as a string epoch; the table stores it as
/// an INTEGER. An unparsable timestamp is stored as zero rather than failing
/// the write.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::exchange_rates)]
pub struct NewExchangeRateRow {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: i64,
    pub create_date: String,
}

impl From<&ExchangeRate> for NewExchangeRateRow {
    fn from(rate: &ExchangeRate) -> Self {
        Self {
            code: rate.code.clone(),
            codein: rate.counter_code.clone(),
            name: rate.name.clone(),
            high: rate.high.clone(),
            low: rate.low.clone(),
            var_bid: rate.var_bid.clone(),
            pct_change: rate.pct_change.clone(),
            bid: rate.bid.clone(),
            ask: rate.ask.clone(),
            timestamp: rate.timestamp.parse().unwrap_or_default(),
            create_date: rate.create_date.clone(),
        }
    }
}

/// Full row shape; only used by tests, the service never reads back.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::exchange_rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExchangeRateRow {
    pub id: i64,
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: i64,
    pub create_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rate() -> ExchangeRate {
        ExchangeRate {
            code: "USD".into(),
            counter_code: "BRL".into(),
            name: "Dólar Americano/Real Brasileiro".into(),
            high: "5.78".into(),
            low: "5.71".into(),
            var_bid: "0.02".into(),
            pct_change: "0.37".into(),
            bid: "5.7405".into(),
            ask: "5.7415".into(),
            timestamp: "1756500000".into(),
            create_date: "2026-08-29 18:00:00".into(),
        }
    }

    #[test]
    fn maps_domain_rate_to_insert_row() {
        let row = NewExchangeRateRow::from(&sample_rate());
        assert_eq!(row.codein, "BRL");
        assert_eq!(row.bid, "5.7405");
        assert_eq!(row.timestamp, 1_756_500_000);
    }

    #[test]
    fn unparsable_timestamp_becomes_zero() {
        let mut rate = sample_rate();
        rate.timestamp = "not-a-number".into();
        let row = NewExchangeRateRow::from(&rate);
        assert_eq!(row.timestamp, 0);
    }
}
