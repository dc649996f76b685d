use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns service status and whether saved jobs survive a restart.
pub async fn health_handler(persistent_store: bool) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "hireintel-api",
        "persistence": persistent_store
    }))
}
