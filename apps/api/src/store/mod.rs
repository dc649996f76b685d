//! Record Store — persists analyzed jobs and lists them newest first.
//!
//! `PgJobStore` is the real backend. When no store is reachable at startup the app runs on
//! `DegradedJobStore`, which keeps the pipeline working but persists nothing.

pub mod degraded;
pub mod document;
#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{JobRecord, NewJob};

pub use degraded::DegradedJobStore;
pub use postgres::PgJobStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("could not encode job document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Storage backend for job records. Carried in `AppState` as `Arc<dyn JobStore>`.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// All stored jobs, newest `saved_at` first.
    async fn list(&self) -> Result<Vec<JobRecord>, StoreError>;

    /// Stores a job and returns it with its assigned id.
    async fn create(&self, job: NewJob) -> Result<JobRecord, StoreError>;

    /// False when records do not survive a restart.
    fn is_persistent(&self) -> bool {
        true
    }
}
