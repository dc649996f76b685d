pub mod health;

use axum::{
    http::HeaderValue,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::graphql::{handlers, JobsSchema};

/// Origin of the browser extension that calls this API. Always allowed.
pub const EXTENSION_ORIGIN: &str = "chrome-extension://kpgchijndeoboichpekpmlkekkekfacd";

/// GET /
async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "HireIntel API is running" }))
}

pub fn build_router(schema: JobsSchema, persistent_store: bool) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route(
            "/health",
            get(move || health::health_handler(persistent_store)),
        )
        .route(
            "/graphql",
            get(handlers::handle_graphiql).post(handlers::handle_graphql),
        )
        .with_state(schema)
}

/// CORS policy: any origin when the list contains `*` (the default), otherwise the listed
/// origins plus the extension origin. Setting `ALLOWED_CORS_ORIGINS` to an explicit list
/// is how a deployment narrows the permissive default; the extension is never locked out.
/// Credentials are never allowed; any method and header is.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let mut origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin '{o}'");
                    None
                }
            })
            .collect();
        origins.push(HeaderValue::from_static(EXTENSION_ORIGIN));
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false)
}
