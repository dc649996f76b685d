mod analysis;
mod config;
mod db;
mod errors;
mod extraction;
mod graphql;
mod jobs;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::FitAnalyzer;
use crate::config::Config;
use crate::db::open_job_store;
use crate::graphql::build_schema;
use crate::llm_client::LlmClient;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireIntel API v{}", env!("CARGO_PKG_VERSION"));

    if config.ai_api_key.is_none() {
        warn!("AI_API_KEY not found in environment variables; model calls will fail");
    }

    // Initialize LLM client
    let llm = LlmClient::new(&config)?;
    info!(
        "LLM client initialized (model: {}, base url: {})",
        llm.model(),
        config.ai_base_url
    );
    let analyzer = Arc::new(FitAnalyzer::new(Arc::new(llm)));

    // Initialize job store (degrades to no persistence if unavailable)
    let store = open_job_store(config.store_url().as_deref()).await;
    let persistent_store = store.is_persistent();

    let state = AppState { analyzer, store };
    let schema = build_schema(state);

    info!("CORS allowed origins: {:?}", config.allowed_cors_origins);

    let app = build_router(schema, persistent_store)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_cors_origins));

    let listener =
        tokio::net::TcpListener::bind((config.app_host.as_str(), config.app_port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
