//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Infrastructure
/// concerns belong elsewhere. Name uniqueness is the only rule enforced on input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A person with the same name is already stored.
    #[error("name must be unique: {name}")]
    DuplicateName { name: String },
}

impl DomainError {
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }
}
