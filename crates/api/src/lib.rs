//! GraphQL API over the in-memory person store.

pub mod app;
pub mod schema;
