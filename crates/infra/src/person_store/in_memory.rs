use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use phonebook_core::{DomainError, DomainResult, PersonId};
use phonebook_people::{NewPerson, Person};

use super::r#trait::PersonStore;
use crate::seed;

/// In-memory person store.
///
/// A single `RwLock` guards the whole list, so every operation (including the
/// duplicate check + append of `insert`) is atomic with respect to the others.
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    people: RwLock<Vec<Person>>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the default directory of people.
    pub fn seeded() -> Self {
        let store = Self::new();
        for person in seed::default_people() {
            if let Err(e) = store.insert(person) {
                tracing::warn!("skipping seed record: {e}");
            }
        }
        store
    }

    // A panic while holding the lock cannot leave the Vec half-mutated, so the
    // poisoned guard is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Person>> {
        self.people.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Person>> {
        self.people.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn position(people: &[Person], name: &str) -> Option<usize> {
        people.iter().position(|p| p.name() == name)
    }
}

impl PersonStore for InMemoryPersonStore {
    fn count(&self) -> usize {
        self.read().len()
    }

    fn list(&self) -> Vec<Person> {
        self.read().clone()
    }

    fn find_by_name(&self, name: &str) -> Option<Person> {
        self.read().iter().find(|p| p.name() == name).cloned()
    }

    fn insert(&self, person: NewPerson) -> DomainResult<Person> {
        let mut people = self.write();
        if Self::position(&people, &person.name).is_some() {
            return Err(DomainError::duplicate_name(person.name));
        }

        let person = person.into_person(PersonId::new());
        people.push(person.clone());
        Ok(person)
    }

    fn update_phone(&self, name: &str, phone: Option<String>) -> Option<Person> {
        let mut people = self.write();
        let idx = Self::position(&people, name)?;

        let updated = people[idx].clone().with_phone(phone);
        people[idx] = updated.clone();
        Some(updated)
    }

    fn remove(&self, name: &str) -> Option<Person> {
        let mut people = self.write();
        let idx = Self::position(&people, name)?;
        Some(people.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook_core::Entity;
    use proptest::prelude::*;

    fn names(store: &InMemoryPersonStore) -> Vec<String> {
        store.list().iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn insert_assigns_fresh_ids_and_keeps_order() {
        let store = InMemoryPersonStore::new();
        let a = store.insert(NewPerson::named("Ada")).unwrap();
        let b = store.insert(NewPerson::named("Bob")).unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(store.count(), 2);
        assert_eq!(names(&store), vec!["Ada", "Bob"]);
    }

    #[test]
    fn duplicate_name_is_rejected_and_store_unchanged() {
        let store = InMemoryPersonStore::new();
        store.insert(NewPerson::named("Bob").with_age(40)).unwrap();
        let before = store.list();

        let err = store.insert(NewPerson::named("Bob").with_age(3)).unwrap_err();
        assert_eq!(err, DomainError::duplicate_name("Bob"));
        assert_eq!(store.count(), 1);
        assert_eq!(store.list(), before);
    }

    #[test]
    fn empty_name_is_accepted_and_kept_unique() {
        let store = InMemoryPersonStore::new();
        let created = store.insert(NewPerson::named("")).unwrap();
        assert_eq!(created.name(), "");
        assert_eq!(store.find_by_name("").unwrap(), created);

        assert_eq!(
            store.insert(NewPerson::named("")).unwrap_err(),
            DomainError::duplicate_name("")
        );
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn find_by_name_is_exact_and_case_sensitive() {
        let store = InMemoryPersonStore::new();
        store.insert(NewPerson::named("Ada")).unwrap();

        assert_eq!(store.find_by_name("Ada").unwrap().name(), "Ada");
        assert!(store.find_by_name("ada").is_none());
        assert!(store.find_by_name("Ad").is_none());
    }

    #[test]
    fn update_phone_replaces_only_the_phone() {
        let store = InMemoryPersonStore::new();
        let created = store
            .insert(
                NewPerson::named("Ada")
                    .with_phone("old")
                    .with_age(20)
                    .with_address("Main St", "London"),
            )
            .unwrap();

        let updated = store.update_phone("Ada", Some("new".to_string())).unwrap();
        assert_eq!(updated.phone(), Some("new"));
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.age(), created.age());
        assert_eq!(updated.address(), created.address());
        assert_eq!(store.find_by_name("Ada").unwrap(), updated);
    }

    #[test]
    fn update_phone_on_missing_name_is_a_no_op() {
        let store = InMemoryPersonStore::new();
        store.insert(NewPerson::named("Ada").with_phone("1")).unwrap();
        store.insert(NewPerson::named("Bob").with_phone("2")).unwrap();
        let before = store.list();

        assert!(store.update_phone("Nobody", Some("9".to_string())).is_none());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn remove_shifts_later_records_up() {
        let store = InMemoryPersonStore::new();
        for name in ["Ada", "Bob", "Cy"] {
            store.insert(NewPerson::named(name)).unwrap();
        }

        let removed = store.remove("Bob").unwrap();
        assert_eq!(removed.name(), "Bob");
        assert_eq!(names(&store), vec!["Ada", "Cy"]);
        assert!(store.find_by_name("Bob").is_none());
    }

    #[test]
    fn remove_on_missing_name_keeps_the_last_record() {
        let store = InMemoryPersonStore::new();
        store.insert(NewPerson::named("Ada")).unwrap();
        store.insert(NewPerson::named("Bob")).unwrap();

        assert!(store.remove("Nobody").is_none());
        assert_eq!(names(&store), vec!["Ada", "Bob"]);
    }

    #[test]
    fn removed_name_can_be_inserted_again_under_a_new_id() {
        let store = InMemoryPersonStore::new();
        let first = store.insert(NewPerson::named("Ada")).unwrap();
        store.remove("Ada").unwrap();
        let second = store.insert(NewPerson::named("Ada")).unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn seeded_store_holds_the_default_people() {
        let store = InMemoryPersonStore::seeded();
        assert_eq!(store.count(), seed::default_people().len());
        assert!(store.find_by_name("Leanne Graham").is_some());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: after inserting any list of names, the count equals the number
        /// of distinct names, and every duplicate attempt was rejected.
        #[test]
        fn count_tracks_successful_inserts(
            names in prop::collection::vec("[a-d]{1,2}", 0..20)
        ) {
            let store = InMemoryPersonStore::new();
            let mut accepted = 0usize;
            let mut seen = std::collections::HashSet::new();

            for name in &names {
                let result = store.insert(NewPerson::named(name.clone()));
                if seen.insert(name.clone()) {
                    prop_assert!(result.is_ok());
                    accepted += 1;
                } else {
                    prop_assert_eq!(result.unwrap_err(), DomainError::duplicate_name(name.clone()));
                }
            }

            prop_assert_eq!(store.count(), accepted);
        }

        /// Property: removing an existing name decrements the count by exactly one;
        /// removing an unknown name leaves the store unchanged.
        #[test]
        fn remove_changes_count_by_at_most_one(
            names in prop::collection::hash_set("[a-z]{1,4}", 1..10),
            target in "[a-z]{1,4}",
        ) {
            let store = InMemoryPersonStore::new();
            for name in &names {
                store.insert(NewPerson::named(name.clone())).unwrap();
            }
            let before = store.list();

            let removed = store.remove(&target);
            if names.contains(&target) {
                prop_assert_eq!(removed.map(|p| p.name().to_string()), Some(target.clone()));
                prop_assert_eq!(store.count(), before.len() - 1);
                prop_assert!(store.find_by_name(&target).is_none());
            } else {
                prop_assert!(removed.is_none());
                prop_assert_eq!(store.list(), before);
            }
        }
    }
}
