// Job-fit analysis: prompt construction, one model call, reply normalization.
// All model calls go through llm_client.

pub mod analyzer;
pub mod prompts;
pub mod score;

use thiserror::Error;

use crate::llm_client::LlmError;

pub use analyzer::FitAnalyzer;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("model call failed: {0}")]
    Model(#[from] LlmError),

    #[error("model returned malformed JSON: {0}")]
    MalformedOutput(serde_json::Error),

    #[error("model returned JSON that is not an object")]
    NotAnObject,
}
