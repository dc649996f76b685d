use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::store::{DegradedJobStore, JobStore, PgJobStore};

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Opens the job store, or falls back to the degraded no-persistence store.
///
/// Any failure here is logged once and never retried per request.
pub async fn open_job_store(store_url: Option<&str>) -> Arc<dyn JobStore> {
    let Some(url) = store_url else {
        warn!("No job store configured; running without persistence");
        return Arc::new(DegradedJobStore);
    };

    match connect_job_store(url).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("Job store unavailable ({e:#}); running without persistence");
            Arc::new(DegradedJobStore)
        }
    }
}

async fn connect_job_store(url: &str) -> Result<PgJobStore> {
    let store = PgJobStore::new(create_pool(url).await?);
    store.ensure_schema().await?;
    Ok(store)
}
