//! Single-writer actor for the SQLite database.
//!
//! SQLite tolerates one writer at a time; instead of letting concurrent
//! requests contend for the write lock, all writes funnel through one
//! background task that owns a dedicated connection and processes jobs
//! serially, each inside an immediate transaction.

use diesel::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use cotacao_core::errors::{DatabaseError, Error, Result};
use cotacao_core::quotes::RecordId;

use super::DbPool;
use crate::errors::StorageError;

type WriteResult = std::result::Result<RecordId, StorageError>;
type WriteJob = Box<dyn FnOnce(&mut SqliteConnection) -> WriteResult + Send + 'static>;

/// Handle for sending write jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(WriteJob, oneshot::Sender<WriteResult>)>,
}

impl WriteHandle {
    /// Execute a write job on the actor's dedicated connection.
    ///
    /// Jobs fail with [`StorageError`]; the conversion to the core error
    /// happens once, here, so a job's classification (unique violation,
    /// query failure) survives the trip through the actor. Callers that stop
    /// waiting (a lapsed write window drops the reply receiver) do not
    /// interrupt the job itself; the actor finishes it and discards the
    /// reply.
    pub async fn exec<F>(&self, job: F) -> Result<RecordId>
    where
        F: FnOnce(&mut SqliteConnection) -> WriteResult + Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx.send((Box::new(job), ret_tx)).await.map_err(|_| {
            Error::Database(DatabaseError::Internal("writer task stopped".to_string()))
        })?;

        let result = ret_rx.await.map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "writer dropped the reply".to_string(),
            ))
        })?;

        result.map_err(Error::from)
    }
}

/// Spawn the background writer task.
///
/// The actor holds one pooled connection for its lifetime and terminates when
/// the last [`WriteHandle`] is dropped.
pub fn spawn_writer(pool: &DbPool) -> Result<WriteHandle> {
    let (tx, mut rx) = mpsc::channel::<(WriteJob, oneshot::Sender<WriteResult>)>(1024);

    let mut conn = super::get_connection(pool)?;

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn.immediate_transaction::<_, StorageError, _>(|c| job(c));

            // The requester may have given up already; that is fine.
            let _ = reply_tx.send(result);
        }
    });

    Ok(WriteHandle { tx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    use crate::db::create_pool;

    fn test_pool() -> (tempfile::TempDir, Arc<DbPool>) {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("test.db");
        let pool = create_pool(db_path.to_str().unwrap()).unwrap();
        (tmp, pool)
    }

    #[tokio::test]
    async fn successful_jobs_return_their_record_id() {
        let (_tmp, pool) = test_pool();
        let writer = spawn_writer(&pool).unwrap();

        let id = writer.exec(|_conn| Ok(7)).await.unwrap();

        assert_eq!(id, 7);
    }

    #[tokio::test]
    async fn failed_jobs_keep_their_error_classification() {
        let (_tmp, pool) = test_pool();
        let writer = spawn_writer(&pool).unwrap();

        let err = writer
            .exec(|_conn| {
                Err(StorageError::QueryFailed(DieselError::DatabaseError(
                    DatabaseErrorKind::UniqueViolation,
                    Box::new("duplicate quote".to_string()),
                )))
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(ref message))
                if message == "duplicate quote"
        ));
    }
}
