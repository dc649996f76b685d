use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// LLM judgment of how well a resume fits a job. Immutable once attached to a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct Analysis {
    /// Always within 0..=100.
    pub match_score: u8,
    pub fit_summary: String,
    pub strengths: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    /// Email body only; paragraphs separated by blank lines.
    pub application_email: String,
}

/// A saved job posting and its analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// ISO-8601, set once at creation.
    pub saved_at: String,
    pub analysis: Option<Analysis>,
}

/// A job about to be stored; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub saved_at: String,
    pub analysis: Option<Analysis>,
}

impl NewJob {
    pub fn with_id(self, id: impl Into<String>) -> JobRecord {
        JobRecord {
            id: id.into(),
            title: self.title,
            company: self.company,
            location: self.location,
            description: self.description,
            saved_at: self.saved_at,
            analysis: self.analysis,
        }
    }
}
