//! GraphQL schema: `jobs` query and `analyzeJob` mutation.

pub mod handlers;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::jobs::{analyze_and_store, list_jobs, AnalyzeJobInput};
use crate::models::JobRecord;
use crate::state::AppState;

pub type JobsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> JobsSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Saved jobs, newest first.
    async fn jobs(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<JobRecord>> {
        let state = ctx.data::<AppState>()?;
        list_jobs(state).await.map_err(|e| e.extend())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Analyzes a resume against a job posting and saves the result.
    async fn analyze_job(
        &self,
        ctx: &Context<'_>,
        title: String,
        company: String,
        location: String,
        description: String,
        resume_base64: String,
    ) -> async_graphql::Result<JobRecord> {
        let state = ctx.data::<AppState>()?;
        let input = AnalyzeJobInput {
            title,
            company,
            location,
            description,
            resume_base64,
        };
        analyze_and_store(state, input)
            .await
            .map_err(|e| e.extend())
    }
}
