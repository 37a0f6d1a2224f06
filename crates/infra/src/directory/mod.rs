//! Directory Service boundary: the external REST source of user records.
//!
//! The directory is unrelated to the local person store; it is fetched live on
//! every call and never cached.

pub mod http;
pub mod record;

pub use http::HttpDirectoryClient;
pub use record::{DirectoryAddress, DirectoryRecord};

use thiserror::Error;

/// Failure to obtain records from the Directory Service.
///
/// Every variant is terminal for the calling operation; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Transport failure (connect, TLS, timeout, ...).
    #[error("directory service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with a non-success status.
    #[error("directory service returned status {0}")]
    Status(u16),

    /// The body was not a JSON array of records.
    #[error("directory service response could not be decoded: {0}")]
    Decode(String),
}

/// Client for the external Directory Service.
#[async_trait::async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Fetch every user record the service currently exposes.
    async fn fetch_users(&self) -> Result<Vec<DirectoryRecord>, DirectoryError>;
}

#[async_trait::async_trait]
impl<C> DirectoryClient for std::sync::Arc<C>
where
    C: DirectoryClient + ?Sized,
{
    async fn fetch_users(&self) -> Result<Vec<DirectoryRecord>, DirectoryError> {
        (**self).fetch_users().await
    }
}

/// Fixed set of records, for tests and offline development.
#[derive(Debug, Clone)]
pub struct StaticDirectoryClient {
    result: Result<Vec<DirectoryRecord>, DirectoryError>,
}

impl StaticDirectoryClient {
    pub fn new(records: Vec<DirectoryRecord>) -> Self {
        Self {
            result: Ok(records),
        }
    }

    pub fn failing(err: DirectoryError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait::async_trait]
impl DirectoryClient for StaticDirectoryClient {
    async fn fetch_users(&self) -> Result<Vec<DirectoryRecord>, DirectoryError> {
        self.result.clone()
    }
}
