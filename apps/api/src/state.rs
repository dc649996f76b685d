use std::sync::Arc;

use crate::analysis::FitAnalyzer;
use crate::store::JobStore;

/// Process-lifetime service handles, shared with every GraphQL resolver via schema data.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<FitAnalyzer>,
    /// Postgres-backed, or the degraded no-op store when persistence is unavailable.
    pub store: Arc<dyn JobStore>,
}
