use axum::{Router, routing::get};

pub mod graphql;
pub mod system;

/// GraphQL endpoint, mounted at the root and at `/graphql`.
pub fn router() -> Router {
    Router::new()
        .route("/", get(graphql::explorer).post(graphql::execute))
        .route("/graphql", get(graphql::explorer).post(graphql::execute))
}
