//! Strongly-typed identifiers used across the domain.

use serde::Serialize;
use uuid::Uuid;

/// Identifier of a person record.
///
/// Assigned once, when the record is inserted into the store, and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PersonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
