use serde::{Deserialize, Serialize};

use phonebook_core::{Entity, PersonId, ValueObject};

/// Age a person must strictly exceed for `can_drink` to hold.
pub const LEGAL_DRINKING_AGE: i32 = 18;

/// Postal address view over a person's `street` and `city` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
}

impl ValueObject for Address {}

/// Arguments for creating a person. The store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub street: Option<String>,
    pub city: Option<String>,
}

impl NewPerson {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_address(mut self, street: impl Into<String>, city: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self.city = Some(city.into());
        self
    }

    /// Materialize the record under a freshly assigned identifier.
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            phone: self.phone,
            age: self.age,
            street: self.street,
            city: self.city,
        }
    }
}

/// A stored person. `name` acts as the business key for lookups.
///
/// Built only by the store, through `NewPerson::into_person`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: PersonId,
    name: String,
    phone: Option<String>,
    age: Option<i32>,
    street: Option<String>,
    city: Option<String>,
}

impl Person {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Derived, never stored.
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            city: self.city.clone(),
        }
    }

    /// `None` when the age is unknown.
    pub fn can_drink(&self) -> Option<bool> {
        self.age.map(|age| age > LEGAL_DRINKING_AGE)
    }

    /// Replace the phone number; id and every other field are kept.
    pub fn with_phone(self, phone: Option<String>) -> Self {
        Self { phone, ..self }
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
