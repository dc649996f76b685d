use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::models::{JobRecord, NewJob};
use crate::store::document::{from_document, to_document};
use crate::store::{JobStore, StoreError};

/// The `jobs` collection: one JSONB document per job, keyed by an opaque string id.
const CREATE_JOBS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id          TEXT PRIMARY KEY,
        document    JSONB NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

/// `saved_at` is compared bytewise (`COLLATE "C"`) so ISO-8601 strings sort by time under
/// any database locale. The list query uses the same expression so it can use the index.
const CREATE_SAVED_AT_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS jobs_saved_at_c_idx
        ON jobs (((document->>'saved_at') COLLATE "C") DESC)
"#;

const LIST_JOBS: &str = r#"
    SELECT id, document FROM jobs
    ORDER BY (document->>'saved_at') COLLATE "C" DESC NULLS LAST
"#;

#[derive(Debug, FromRow)]
struct JobRow {
    id: String,
    document: Value,
}

/// PostgreSQL-backed job store.
#[derive(Clone)]
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `jobs` table and its sort index if missing.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_JOBS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_SAVED_AT_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn list(&self) -> Result<Vec<JobRecord>, StoreError> {
        let rows: Vec<JobRow> = sqlx::query_as(LIST_JOBS).fetch_all(&self.pool).await?;

        Ok(rows
            .into_iter()
            .map(|row| from_document(row.id, row.document))
            .collect())
    }

    async fn create(&self, job: NewJob) -> Result<JobRecord, StoreError> {
        let id = Uuid::new_v4().to_string();
        let document = to_document(&job)?;

        sqlx::query("INSERT INTO jobs (id, document) VALUES ($1, $2)")
            .bind(&id)
            .bind(&document)
            .execute(&self.pool)
            .await?;

        info!("Stored job {id} ('{}' at '{}')", job.title, job.company);
        Ok(job.with_id(id))
    }
}
