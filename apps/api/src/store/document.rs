//! Stored job document shape.
//!
//! Jobs are kept as schemaless JSON documents: `title`, `company`, `location`, `description`,
//! `saved_at` and an optional nested `analysis`. Reads are lenient so legacy or partial
//! documents still load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::analysis::score::normalize_match_score;
use crate::models::{Analysis, JobRecord, NewJob};

#[derive(Debug, Serialize)]
struct JobDocumentOut<'a> {
    title: &'a str,
    company: &'a str,
    location: &'a str,
    description: &'a str,
    saved_at: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a Analysis>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JobDocumentIn {
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    description: Option<String>,
    saved_at: Option<String>,
    analysis: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnalysisDocumentIn {
    match_score: Option<Value>,
    fit_summary: Option<String>,
    strengths: Option<Vec<String>>,
    missing_skills: Option<Vec<String>>,
    recommendations: Option<Vec<String>>,
    application_email: Option<String>,
}

/// Encodes a new job as the document written to the store.
pub fn to_document(job: &NewJob) -> Result<Value, serde_json::Error> {
    serde_json::to_value(JobDocumentOut {
        title: &job.title,
        company: &job.company,
        location: &job.location,
        description: &job.description,
        saved_at: &job.saved_at,
        analysis: job.analysis.as_ref(),
    })
}

/// Rebuilds a record from a stored document.
///
/// A missing, null or empty `analysis` yields `analysis: None`; so does a malformed one,
/// with a warning.
pub fn from_document(id: String, document: Value) -> JobRecord {
    let doc: JobDocumentIn = match serde_json::from_value(document) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Job {id} has an unreadable document: {e}");
            JobDocumentIn::default()
        }
    };

    let analysis = match doc.analysis {
        Some(Value::Object(fields)) if !fields.is_empty() => read_analysis(&id, fields),
        None | Some(Value::Null) | Some(Value::Object(_)) => None,
        Some(other) => {
            warn!("Job {id} has a non-object analysis ({other}), presenting none");
            None
        }
    };

    JobRecord {
        id,
        title: doc.title.unwrap_or_default(),
        company: doc.company.unwrap_or_default(),
        location: doc.location.unwrap_or_default(),
        description: doc.description.unwrap_or_default(),
        saved_at: doc.saved_at.unwrap_or_default(),
        analysis,
    }
}

fn read_analysis(id: &str, fields: Map<String, Value>) -> Option<Analysis> {
    let stored: AnalysisDocumentIn = match serde_json::from_value(Value::Object(fields)) {
        Ok(stored) => stored,
        Err(e) => {
            warn!("Job {id} has a malformed analysis, presenting none: {e}");
            return None;
        }
    };

    Some(Analysis {
        match_score: normalize_match_score(stored.match_score.as_ref()).unwrap_or(0),
        fit_summary: stored.fit_summary.unwrap_or_default(),
        strengths: stored.strengths.unwrap_or_default(),
        missing_skills: stored.missing_skills.unwrap_or_default(),
        recommendations: stored.recommendations.unwrap_or_default(),
        application_email: stored.application_email.unwrap_or_default(),
    })
}
