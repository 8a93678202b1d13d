//! `RateStore` implementation backed by Diesel/SQLite.

use std::time::Duration;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use cotacao_core::errors::{DatabaseError, Error, Result};
use cotacao_core::quotes::{ExchangeRate, RateStore, RecordId};

use super::model::NewExchangeRateRow;
use crate::db::write_actor::WriteHandle;
use crate::errors::StorageError;
use crate::schema::exchange_rates;

/// Fixed window for one persistence attempt, measured from the moment the
/// write starts. Independent of the request deadline by design: the deadlines
/// in this system are not nested.
pub const DEFAULT_WRITE_WINDOW: Duration = Duration::from_millis(10);

/// Persists quotes through the single-writer actor.
///
/// Safe for concurrent use: the writer handle is cheaply cloneable and the
/// actor serializes the actual writes internally.
pub struct ExchangeRateRepository {
    writer: WriteHandle,
    write_window: Duration,
}

impl ExchangeRateRepository {
    pub fn new(writer: WriteHandle) -> Self {
        Self::with_write_window(writer, DEFAULT_WRITE_WINDOW)
    }

    pub fn with_write_window(writer: WriteHandle, write_window: Duration) -> Self {
        Self {
            writer,
            write_window,
        }
    }
}

#[async_trait]
impl RateStore for ExchangeRateRepository {
    async fn persist(&self, rate: &ExchangeRate) -> Result<RecordId> {
        let row = NewExchangeRateRow::from(rate);
        debug!("persisting quote bid={} within {:?}", row.bid, self.write_window);

        let write = self.writer.exec(move |conn: &mut SqliteConnection| {
            diesel::insert_into(exchange_rates::table)
                .values(&row)
                .returning(exchange_rates::id)
                .get_result::<RecordId>(conn)
                .map_err(StorageError::QueryFailed)
        });

        match tokio::time::timeout(self.write_window, write).await {
            Ok(result) => result,
            Err(_) => Err(Error::Database(DatabaseError::Timeout(
                self.write_window.as_millis() as u64,
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::db::{create_pool, run_migrations, write_actor::spawn_writer, DbPool};
    use crate::rates::model::ExchangeRateRow;

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

    fn test_repository(window: Duration) -> (tempfile::TempDir, ExchangeRateRepository, Arc<DbPool>) {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("test.db");
        let pool = create_pool(db_path.to_str().unwrap()).unwrap();
        run_migrations(&pool).unwrap();
        let writer = spawn_writer(&pool).unwrap();
        let repo = ExchangeRateRepository::with_write_window(writer, window);
        (tmp, repo, pool)
    }

    #[tokio::test]
    async fn persist_returns_generated_rowids() {
        let (_tmp, repo, _pool) = test_repository(Duration::from_secs(5));

        let first = repo.persist(&sample_rate()).await.unwrap();
        let second = repo.persist(&sample_rate()).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn persisted_row_carries_the_quote_values() {
        let (_tmp, repo, pool) = test_repository(Duration::from_secs(5));

        let id = repo.persist(&sample_rate()).await.unwrap();

        let mut conn = crate::db::get_connection(&pool).unwrap();
        let row: ExchangeRateRow = exchange_rates::table
            .find(id)
            .select(ExchangeRateRow::as_select())
            .first(&mut conn)
            .unwrap();

        assert_eq!(row.code, "USD");
        assert_eq!(row.codein, "BRL");
        assert_eq!(row.bid, "5.7405");
        assert_eq!(row.timestamp, 1_756_500_000);
        assert_eq!(row.create_date, "2026-08-29 18:00:00");
    }

    #[tokio::test]
    async fn lapsed_write_window_reports_timeout() {
        let (_tmp, repo, _pool) = test_repository(Duration::ZERO);

        let err = repo.persist(&sample_rate()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Database(DatabaseError::Timeout(0))
        ));
    }
}
