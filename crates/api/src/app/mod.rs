//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: person store + directory client, and the operations on them
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent GraphQL error values

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::schema;

pub mod errors;
pub mod routes;
pub mod services;

pub use services::{AppServices, build_services};

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: AppServices) -> Router {
    let schema = schema::build_schema(services);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(schema))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
