//! Service wiring: the person store and the directory client, plus the
//! operations resolvers call on them.

use std::sync::Arc;

use phonebook_core::{DomainResult, Entity};
use phonebook_infra::directory::DirectoryRecord;
use phonebook_infra::{
    Config, DirectoryClient, DirectoryError, HttpDirectoryClient, InMemoryPersonStore, PersonStore,
};
use phonebook_people::{NewPerson, Person, PhoneFilter};

/// Shared application services, injected into the GraphQL schema as context data.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn PersonStore>,
    directory: Arc<dyn DirectoryClient>,
}

impl AppServices {
    pub fn new(store: Arc<dyn PersonStore>, directory: Arc<dyn DirectoryClient>) -> Self {
        Self { store, directory }
    }

    pub fn person_count(&self) -> usize {
        self.store.count()
    }

    pub fn all_persons(&self) -> Vec<Person> {
        self.store.list()
    }

    pub fn find_person(&self, name: &str) -> Option<Person> {
        self.store.find_by_name(name)
    }

    pub fn add_person(&self, person: NewPerson) -> DomainResult<Person> {
        let created = self.store.insert(person).inspect_err(|e| {
            tracing::debug!(error = %e, "add person rejected");
        })?;
        tracing::info!(id = %created.id(), name = created.name(), "person added");
        Ok(created)
    }

    pub fn edit_number(&self, name: &str, phone: Option<String>) -> Option<Person> {
        let updated = self.store.update_phone(name, phone);
        match &updated {
            Some(p) => tracing::info!(id = %p.id(), name, "phone number updated"),
            None => tracing::debug!(name, "edit number: no such person"),
        }
        updated
    }

    pub fn remove_person(&self, name: &str) -> Option<Person> {
        let removed = self.store.remove(name);
        match &removed {
            Some(p) => tracing::info!(id = %p.id(), name, "person removed"),
            None => tracing::debug!(name, "remove person: no such person"),
        }
        removed
    }

    /// Fetch the Directory Service users, optionally filtered by phone presence.
    ///
    /// Never reads the local store.
    pub async fn directory_users(
        &self,
        filter: Option<PhoneFilter>,
    ) -> Result<Vec<DirectoryRecord>, DirectoryError> {
        let users = self.directory.fetch_users().await.inspect_err(|e| {
            tracing::warn!(error = %e, "directory service call failed");
        })?;

        Ok(match filter {
            Some(filter) => filter.apply(users, DirectoryRecord::phone),
            None => users,
        })
    }
}

/// Build the production services from configuration.
pub fn build_services(config: &Config) -> Result<AppServices, DirectoryError> {
    let store: Arc<dyn PersonStore> = if config.seed {
        Arc::new(InMemoryPersonStore::seeded())
    } else {
        Arc::new(InMemoryPersonStore::new())
    };

    let directory: Arc<dyn DirectoryClient> = Arc::new(HttpDirectoryClient::new(
        config.directory_url.clone(),
        config.directory_timeout,
    )?);

    tracing::info!(
        people = store.count(),
        directory_url = %config.directory_url,
        "services ready"
    );

    Ok(AppServices::new(store, directory))
}
