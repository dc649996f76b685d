//! Job pipeline: resume extraction → fit analysis → persistence.

use chrono::{SecondsFormat, Utc};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::extraction::extract_resume_text_blocking;
use crate::models::{JobRecord, NewJob};
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct AnalyzeJobInput {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Base64 PDF, optionally data-URI prefixed, or plain resume text.
    pub resume_base64: String,
}

/// Runs the full pipeline and stores the result.
/// Nothing is written when the analysis fails.
#[instrument(skip_all, fields(title = %input.title, company = %input.company))]
pub async fn analyze_and_store(
    state: &AppState,
    input: AnalyzeJobInput,
) -> Result<JobRecord, AppError> {
    let AnalyzeJobInput {
        title,
        company,
        location,
        description,
        resume_base64,
    } = input;

    let resume = extract_resume_text_blocking(resume_base64).await;
    if !resume.is_extracted() {
        info!("Resume was not a readable PDF; analyzing it as plain text");
    }
    let resume_text = resume.into_text();

    let analysis = state
        .analyzer
        .analyze(&resume_text, &description, &title, &company)
        .await?;

    let job = NewJob {
        title,
        company,
        location,
        description,
        saved_at: now_iso8601(),
        analysis: Some(analysis),
    };

    let record = state.store.create(job).await?;
    info!("Job {} analyzed and saved", record.id);
    Ok(record)
}

/// Every stored job, newest first.
pub async fn list_jobs(state: &AppState) -> Result<Vec<JobRecord>, AppError> {
    Ok(state.store.list().await?)
}

/// UTC timestamp with fixed microsecond precision, so string order is time order.
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
