use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{Extension, OriginalUri},
    response::{Html, IntoResponse},
};

use crate::schema::PhonebookSchema;

pub async fn execute(
    Extension(schema): Extension<PhonebookSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let req = req.into_inner();
    tracing::debug!(operation = req.operation_name.as_deref(), "executing graphql request");
    schema.execute(req).await.into()
}

/// GraphiQL explorer, posting back to the path it was served from.
pub async fn explorer(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(uri.path()).finish())
}
