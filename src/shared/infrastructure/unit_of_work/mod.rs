// Ports for running a command and its projections inside one unit of work.
//
// Purpose
// - Let the write store and the read store share a single transaction so a command
//   and every handler it triggers commit together or not at all.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits.
// - Dropping a transaction without calling commit discards its staged writes.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("storage call exceeded its deadline of {millis} ms")]
    Timeout { millis: u64 },
}

#[async_trait]
pub trait UnitOfWork: Send + Sync + 'static {
    type Transaction: Transaction;

    async fn begin(&self) -> Result<Self::Transaction, StorageError>;
}

#[async_trait]
pub trait Transaction: Send + Sync + Sized + 'static {
    async fn commit(self) -> Result<(), StorageError>;
}

/// Bound a storage call by `deadline`, surfacing an elapsed deadline as a storage failure.
pub async fn with_deadline<T, F>(deadline: Duration, call: F) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, StorageError>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result,
        Err(_) => Err(StorageError::Timeout {
            millis: deadline.as_millis() as u64,
        }),
    }
}
