use async_graphql::ErrorExtensions;

use phonebook_core::DomainError;
use phonebook_infra::DirectoryError;

pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const DEPENDENCY_UNAVAILABLE: &str = "DEPENDENCY_UNAVAILABLE";

/// Map a domain failure onto a GraphQL field error with an `extensions.code`.
pub fn domain_error_to_graphql(err: DomainError) -> async_graphql::Error {
    match err {
        DomainError::DuplicateName { name } => {
            graphql_error(BAD_USER_INPUT, "Name must be unique").extend_with(|_, e| {
                e.set("invalidArgs", name);
            })
        }
    }
}

pub fn directory_error_to_graphql(err: DirectoryError) -> async_graphql::Error {
    graphql_error(DEPENDENCY_UNAVAILABLE, err.to_string())
}

pub fn graphql_error(code: &'static str, message: impl Into<String>) -> async_graphql::Error {
    async_graphql::Error::new(message.into()).extend_with(|_, e| {
        e.set("code", code);
    })
}
