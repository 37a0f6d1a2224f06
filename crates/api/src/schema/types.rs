use async_graphql::{ID, Object, SimpleObject};

use phonebook_core::Entity;
use phonebook_infra::directory::DirectoryRecord;
use phonebook_people::{Address, Person, PhoneFilter};

/// Whether a record carries a phone number.
#[derive(async_graphql::Enum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl From<YesNo> for PhoneFilter {
    fn from(value: YesNo) -> Self {
        match value {
            YesNo::Yes => PhoneFilter::Yes,
            YesNo::No => PhoneFilter::No,
        }
    }
}

/// Postal address of a person.
// Both fields are non-null in the schema, so an absent part resolves to "".
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
#[graphql(name = "Address")]
pub struct AddressObject {
    pub city: String,
    pub street: String,
}

impl From<Address> for AddressObject {
    fn from(value: Address) -> Self {
        Self {
            city: value.city.unwrap_or_default(),
            street: value.street.unwrap_or_default(),
        }
    }
}

/// GraphQL view of a person, from the local store or from the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonObject {
    id: String,
    name: String,
    age: Option<i32>,
    phone: Option<String>,
    address: Address,
    can_drink: Option<bool>,
}

#[Object(name = "Person")]
impl PersonObject {
    async fn name(&self) -> &str {
        &self.name
    }

    async fn age(&self) -> Option<i32> {
        self.age
    }

    async fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    async fn address(&self) -> AddressObject {
        self.address.clone().into()
    }

    /// Unknown (null) when the age is unknown.
    async fn can_drink(&self) -> Option<bool> {
        self.can_drink
    }

    async fn id(&self) -> ID {
        ID(self.id.clone())
    }
}

impl From<Person> for PersonObject {
    fn from(p: Person) -> Self {
        Self {
            id: p.id().to_string(),
            address: p.address(),
            can_drink: p.can_drink(),
            name: p.name().to_string(),
            age: p.age(),
            phone: p.phone().map(str::to_string),
        }
    }
}

impl From<DirectoryRecord> for PersonObject {
    fn from(r: DirectoryRecord) -> Self {
        let address = Address {
            street: r.street().map(str::to_string),
            city: r.city().map(str::to_string),
        };
        Self {
            id: r.id.unwrap_or_default(),
            name: r.name.unwrap_or_default(),
            age: None,
            phone: r.phone,
            address,
            can_drink: None,
        }
    }
}

/// Wrap items for a `[Person]` list, whose elements are nullable.
pub fn nullable_list<T: Into<PersonObject>>(items: Vec<T>) -> Vec<Option<PersonObject>> {
    items.into_iter().map(|item| Some(item.into())).collect()
}
