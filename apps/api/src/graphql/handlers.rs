use axum::{extract::State, response::Html, Json};

use crate::graphql::JobsSchema;

/// POST /graphql
pub async fn handle_graphql(
    State(schema): State<JobsSchema>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(schema.execute(request).await)
}

/// GET /graphql
/// Serves the GraphiQL IDE pointed at this endpoint.
pub async fn handle_graphiql() -> Html<String> {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint("/graphql")
            .finish(),
    )
}
