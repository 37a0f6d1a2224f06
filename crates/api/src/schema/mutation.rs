use async_graphql::{Context, Object, Result};

use phonebook_people::NewPerson;

use super::types::PersonObject;
use crate::app::errors;
use crate::app::services::AppServices;

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Returns the created person.
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: Option<String>,
        age: Option<i32>,
        street: Option<String>,
        city: Option<String>,
    ) -> Result<Option<PersonObject>> {
        let created = ctx
            .data::<AppServices>()?
            .add_person(NewPerson {
                name,
                phone,
                age,
                street,
                city,
            })
            .map_err(errors::domain_error_to_graphql)?;
        Ok(Some(created.into()))
    }

    /// Returns the person after the update, or null if no one has that name.
    async fn edit_number(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: Option<String>,
    ) -> Result<Option<PersonObject>> {
        Ok(ctx
            .data::<AppServices>()?
            .edit_number(&name, phone)
            .map(PersonObject::from))
    }

    /// Returns the removed person, or null if no one has that name.
    async fn remove_person(&self, ctx: &Context<'_>, name: String) -> Result<Option<PersonObject>> {
        Ok(ctx
            .data::<AppServices>()?
            .remove_person(&name)
            .map(PersonObject::from))
    }
}
