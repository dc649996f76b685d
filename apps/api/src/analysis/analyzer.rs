//! Fit Analyzer — builds the analysis prompt, calls the model once and normalizes its reply.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::value::RawValue;
use serde_json::Value;
use tracing::{debug, info};

use crate::analysis::prompts::FIT_ANALYSIS_PROMPT_TEMPLATE;
use crate::analysis::score::normalize_match_score;
use crate::analysis::AnalysisError;
use crate::llm_client::ChatModel;
use crate::models::Analysis;

/// Character budget for each of the resume and the job description.
/// Keeps the prompt under small free-tier token limits.
pub const MAX_INPUT_CHARS: usize = 2500;

/// Shape the model is asked to return. Every field is optional.
#[derive(Debug, Default)]
pub struct ModelAnalysis {
    pub match_score: Option<Value>,
    pub fit_summary: Option<String>,
    pub strengths: Option<Vec<String>>,
    pub missing_skills: Option<Vec<String>>,
    pub recommendations: Option<Vec<String>>,
    pub application_email: Option<String>,
}

impl ModelAnalysis {
    /// Parses model output. Only invalid JSON or a non-object reply is an error; a field
    /// of the wrong shape is coerced where possible and otherwise left empty.
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        // Fields stay raw until read, so a number serde_json cannot represent only
        // affects its own field.
        let reply: Box<RawValue> =
            serde_json::from_str(raw).map_err(AnalysisError::MalformedOutput)?;
        let mut fields: HashMap<String, Box<RawValue>> =
            serde_json::from_str(reply.get()).map_err(|_| AnalysisError::NotAnObject)?;

        let mut text = |name: &str| fields.remove(name).and_then(|v| read_text(name, &v));
        let fit_summary = text("fit_summary");
        let application_email = text("application_email");

        let mut list = |name: &str| fields.remove(name).and_then(|v| read_list(name, &v));
        let strengths = list("strengths");
        let missing_skills = list("missing_skills");
        let recommendations = list("recommendations");

        Ok(Self {
            match_score: fields.remove("match_score").map(|v| read_score(&v)),
            fit_summary,
            strengths,
            missing_skills,
            recommendations,
            application_email,
        })
    }

    /// Fills missing fields with empty defaults and normalizes the score.
    pub fn into_analysis(self) -> Analysis {
        let match_score = normalize_match_score(self.match_score.as_ref()).unwrap_or_else(|e| {
            debug!("Defaulting match_score to 0: {e}");
            0
        });

        Analysis {
            match_score,
            fit_summary: self.fit_summary.unwrap_or_default(),
            strengths: self.strengths.unwrap_or_default(),
            missing_skills: self.missing_skills.unwrap_or_default(),
            recommendations: self.recommendations.unwrap_or_default(),
            application_email: self.application_email.unwrap_or_default(),
        }
    }
}

fn read_value(name: &str, raw: &RawValue) -> Option<Value> {
    match serde_json::from_str(raw.get()) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Ignoring unreadable {name} {}: {e}", raw.get());
            None
        }
    }
}

/// An unreadable score becomes `null`, which normalization treats as malformed.
fn read_score(raw: &RawValue) -> Value {
    read_value("match_score", raw).unwrap_or(Value::Null)
}

fn read_text(name: &str, raw: &RawValue) -> Option<String> {
    match read_value(name, raw)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => {
            debug!("Ignoring {name} that is not a string: {other}");
            None
        }
    }
}

/// Accepts a list of strings; a lone string becomes a one-item list.
fn read_list(name: &str, raw: &RawValue) -> Option<Vec<String>> {
    match read_value(name, raw)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    other => {
                        debug!("Dropping {name} entry that is not a string: {other}");
                        None
                    }
                })
                .collect(),
        ),
        Value::String(s) if !s.trim().is_empty() => Some(vec![s]),
        Value::String(_) | Value::Null => None,
        other => {
            debug!("Ignoring {name} that is not a list: {other}");
            None
        }
    }
}

/// Scores a resume against a job with one model call.
pub struct FitAnalyzer {
    model: Arc<dyn ChatModel>,
}

impl FitAnalyzer {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    pub async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
        job_title: &str,
        company_name: &str,
    ) -> Result<Analysis, AnalysisError> {
        let prompt = build_prompt(resume_text, job_description, job_title, company_name);

        let raw = self.model.complete_json(&prompt).await?;
        let analysis = ModelAnalysis::parse(&raw)?.into_analysis();

        info!(
            "Fit analysis complete for '{job_title}' at '{company_name}': score {}",
            analysis.match_score
        );
        Ok(analysis)
    }
}

/// Builds the analysis prompt from inputs truncated to `MAX_INPUT_CHARS` each.
pub fn build_prompt(
    resume_text: &str,
    job_description: &str,
    job_title: &str,
    company_name: &str,
) -> String {
    fill_template(
        FIT_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("job_title", job_title),
            ("company_name", company_name),
            ("resume_text", truncate_chars(resume_text, MAX_INPUT_CHARS)),
            (
                "job_description",
                truncate_chars(job_description, MAX_INPUT_CHARS),
            ),
        ],
    )
}

/// Returns at most the first `max` characters, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Substitutes `{key}` placeholders in a single pass, so braces inside values are left alone.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    'scan: while let Some(start) = rest.find('{') {
        for (key, value) in values {
            let placeholder = format!("{{{key}}}");
            if rest[start..].starts_with(&placeholder) {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &rest[start + placeholder.len()..];
                continue 'scan;
            }
        }
        out.push_str(&rest[..=start]);
        rest = &rest[start + 1..];
    }
    out.push_str(rest);
    out
}
