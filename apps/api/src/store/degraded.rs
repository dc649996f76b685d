use async_trait::async_trait;
use tracing::debug;

use crate::models::{JobRecord, NewJob};
use crate::store::{JobStore, StoreError};

/// Id handed out for jobs that were never persisted.
pub const PLACEHOLDER_JOB_ID: &str = "temp_id";

/// No-op store used when persistence is unavailable.
/// `list` is always empty; `create` echoes the job back under `PLACEHOLDER_JOB_ID`.
pub struct DegradedJobStore;

#[async_trait]
impl JobStore for DegradedJobStore {
    async fn list(&self) -> Result<Vec<JobRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn create(&self, job: NewJob) -> Result<JobRecord, StoreError> {
        debug!("Persistence disabled; returning transient job record");
        Ok(job.with_id(PLACEHOLDER_JOB_ID))
    }

    fn is_persistent(&self) -> bool {
        false
    }
}
