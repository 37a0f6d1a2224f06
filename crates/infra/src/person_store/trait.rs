use std::sync::Arc;

use phonebook_core::DomainResult;
use phonebook_people::{NewPerson, Person};

/// Person store abstraction used by the resolver layer.
///
/// Lookups use `name` as the business key, with exact, case-sensitive equality.
/// When several records share a name, the first in insertion order wins.
pub trait PersonStore: Send + Sync {
    /// Number of stored records.
    fn count(&self) -> usize;

    /// Owned copy of every record, in insertion order.
    fn list(&self) -> Vec<Person>;

    fn find_by_name(&self, name: &str) -> Option<Person>;

    /// Append a record under a fresh id.
    ///
    /// Fails with `DomainError::DuplicateName` (leaving the store untouched) when
    /// a record with the same name already exists.
    fn insert(&self, person: NewPerson) -> DomainResult<Person>;

    /// Replace the phone of the first record named `name`. Returns the updated
    /// record, or `None` when no record matches.
    fn update_phone(&self, name: &str, phone: Option<String>) -> Option<Person>;

    /// Delete the first record named `name`. Returns the removed record, or
    /// `None` when no record matches.
    fn remove(&self, name: &str) -> Option<Person>;
}

impl<S> PersonStore for Arc<S>
where
    S: PersonStore + ?Sized,
{
    fn count(&self) -> usize {
        (**self).count()
    }

    fn list(&self) -> Vec<Person> {
        (**self).list()
    }

    fn find_by_name(&self, name: &str) -> Option<Person> {
        (**self).find_by_name(name)
    }

    fn insert(&self, person: NewPerson) -> DomainResult<Person> {
        (**self).insert(person)
    }

    fn update_phone(&self, name: &str, phone: Option<String>) -> Option<Person> {
        (**self).update_phone(name, phone)
    }

    fn remove(&self, name: &str) -> Option<Person> {
        (**self).remove(name)
    }
}
