use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

pub const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AI_MODEL: &str = "gpt-3.5-turbo";

/// Application configuration loaded from environment variables.
/// Only the bind port and numeric knobs can fail to load; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub ai_api_key: Option<String>,
    pub ai_base_url: String,
    pub ai_model: String,
    /// Extra attempts after a failed model call. Zero keeps the single-call behavior.
    pub ai_max_retries: u32,
    pub ai_timeout_secs: Option<u64>,
    pub allowed_cors_origins: Vec<String>,
    pub app_host: String,
    pub app_port: u16,
    pub store_credentials_path: Option<PathBuf>,
    pub database_url: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ai_api_key: optional_env("AI_API_KEY"),
            ai_base_url: optional_env("AI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_AI_BASE_URL.to_string()),
            ai_model: optional_env("AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            ai_max_retries: optional_env("AI_MAX_RETRIES")
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("AI_MAX_RETRIES must be a non-negative integer")?
                .unwrap_or(0),
            ai_timeout_secs: optional_env("AI_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("AI_TIMEOUT_SECS must be a whole number of seconds")?,
            allowed_cors_origins: parse_origins(
                &std::env::var("ALLOWED_CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
            app_host: optional_env("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            app_port: std::env::var("APP_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("APP_PORT must be a valid port number")?,
            store_credentials_path: optional_env("STORE_CREDENTIALS_PATH").map(PathBuf::from),
            database_url: optional_env("DATABASE_URL"),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Resolves the store connection URL.
    ///
    /// A readable credentials file wins; otherwise the ambient `DATABASE_URL` is used.
    /// `None` means persistence is disabled.
    pub fn store_url(&self) -> Option<String> {
        if let Some(path) = &self.store_credentials_path {
            match read_credentials_file(path) {
                Ok(url) => return Some(url),
                Err(e) => warn!("Ignoring store credentials file: {e:#}"),
            }
        }
        self.database_url.clone()
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn read_credentials_file(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    let url = contents.trim();
    anyhow::ensure!(!url.is_empty(), "'{}' is empty", path.display());
    Ok(url.to_string())
}
