use async_graphql::{Context, Object, Result};

use super::types::{PersonObject, YesNo, nullable_list};
use crate::app::errors;
use crate::app::services::AppServices;

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn person_count(&self, ctx: &Context<'_>) -> Result<usize> {
        Ok(ctx.data::<AppServices>()?.person_count())
    }

    async fn all_persons(&self, ctx: &Context<'_>) -> Result<Vec<Option<PersonObject>>> {
        Ok(nullable_list(ctx.data::<AppServices>()?.all_persons()))
    }

    /// Users from the external directory, not the local people.
    async fn all_persons_by_phone(
        &self,
        ctx: &Context<'_>,
        phone: Option<YesNo>,
    ) -> Result<Option<Vec<Option<PersonObject>>>> {
        let users = ctx
            .data::<AppServices>()?
            .directory_users(phone.map(Into::into))
            .await
            .map_err(errors::directory_error_to_graphql)?;
        Ok(Some(nullable_list(users)))
    }

    async fn find_person(&self, ctx: &Context<'_>, name: String) -> Result<Option<PersonObject>> {
        Ok(ctx
            .data::<AppServices>()?
            .find_person(&name)
            .map(PersonObject::from))
    }
}
