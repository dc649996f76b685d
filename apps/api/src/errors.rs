use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `ErrorExtensions` so resolvers can surface it as a GraphQL error with a code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Analysis(_) => "ANALYSIS_ERROR",
            AppError::Store(_) => "STORE_ERROR",
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let message = match self {
            AppError::Analysis(e) => {
                tracing::error!("Analysis error: {e}");
                format!("Job analysis failed: {e}")
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                "A storage error occurred".to_string()
            }
        };
        let code = self.code();

        async_graphql::Error::new(message).extend_with(|_, ext| ext.set("code", code))
    }
}
