use std::time::Duration;

use super::{DirectoryClient, DirectoryError, DirectoryRecord};

/// Directory client backed by a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    client: reqwest::Client,
    url: String,
}

impl HttpDirectoryClient {
    /// Build a client for `url`. Requests that take longer than `timeout` fail
    /// with `DirectoryError::Unavailable`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait::async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn fetch_users(&self) -> Result<Vec<DirectoryRecord>, DirectoryError> {
        let resp = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                DirectoryError::Unavailable(format!("timed out: {e}"))
            } else {
                DirectoryError::Unavailable(e.to_string())
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let records: Vec<DirectoryRecord> = resp
            .json()
            .await
            .map_err(|e| DirectoryError::Decode(e.to_string()))?;

        tracing::debug!(url = %self.url, count = records.len(), "fetched directory users");
        Ok(records)
    }
}
