//! GraphQL schema: the person API surface and its resolvers.

mod mutation;
mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{AddressObject, PersonObject, YesNo};

use crate::app::services::AppServices;

pub type PhonebookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around the given services.
pub fn build_schema(services: AppServices) -> PhonebookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}
