//! Test doubles shared across module tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::analysis::FitAnalyzer;
use crate::llm_client::{ChatModel, LlmError};
use crate::models::{Analysis, NewJob};
use crate::state::AppState;
use crate::store::JobStore;

pub const GOOD_REPLY: &str = r#"{
    "match_score": 78,
    "fit_summary": "Solid Python experience; no Kubernetes.",
    "strengths": ["Python", "REST APIs"],
    "missing_skills": ["Kubernetes"],
    "recommendations": ["Highlight deployment work"],
    "application_email": "Dear Hiring Manager,\n\nI am writing to apply for the SWE role at Acme.\n\nBest regards,\nJane Doe"
}"#;

enum Reply {
    Text(String),
    Error(Box<dyn Fn() -> LlmError + Send + Sync>),
}

/// Canned chat model that records every prompt it receives.
pub struct FakeModel {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: impl Fn() -> LlmError + Send + Sync + 'static) -> Self {
        Self {
            reply: Reply::Error(Box::new(error)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for FakeModel {
    async fn complete_json(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Error(make) => Err(make()),
        }
    }
}

pub fn state_with(model: Arc<dyn ChatModel>, store: Arc<dyn JobStore>) -> AppState {
    AppState {
        analyzer: Arc::new(FitAnalyzer::new(model)),
        store,
    }
}

pub fn new_job(title: &str, saved_at: &str) -> NewJob {
    NewJob {
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        description: "Python required".to_string(),
        saved_at: saved_at.to_string(),
        analysis: Some(Analysis {
            match_score: 75,
            fit_summary: "Good fit".to_string(),
            strengths: vec!["Python".to_string()],
            missing_skills: vec!["Go".to_string()],
            recommendations: vec!["Learn Go".to_string()],
            application_email: "Dear Hiring Manager,\n\nHello.\n\nJane Doe".to_string(),
        }),
    }
}
