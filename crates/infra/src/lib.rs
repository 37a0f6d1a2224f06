//! Infrastructure layer: person storage, config, external services.

pub mod config;
pub mod directory;
pub mod person_store;
pub mod seed;

pub use config::{Config, ConfigError};
pub use directory::{DirectoryClient, DirectoryError, HttpDirectoryClient, StaticDirectoryClient};
pub use person_store::{InMemoryPersonStore, PersonStore};
