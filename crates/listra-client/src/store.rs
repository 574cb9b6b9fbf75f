//! `reqwest`-backed implementation of the `ItemStore` seam.

use async_trait::async_trait;
use serde_json::json;

use listra_core::{Error, Item, ItemId, ItemStore, Result};

use crate::config::ClientConfig;

/// HTTP client for the collection resource.
///
/// Each call is a single request/response exchange; failures map to
/// [`Error`] and are never retried here. One pooled `reqwest::Client` is
/// held per store.
pub struct HttpStore {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpStore {
    /// Creates a store from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::http_with_source("failed to build HTTP client", e))?;
        Ok(Self { client, config })
    }

    /// Creates a store with default configuration (localhost resource).
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Maps a non-success response to an error, passing successes through.
    fn check_status(response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::status(status.as_u16()))
        }
    }
}

#[async_trait]
impl ItemStore for HttpStore {
    async fn list(&self) -> Result<Vec<Item>> {
        tracing::debug!(url = %self.config.base_url, "listing items");
        let response = self
            .client
            .get(&self.config.base_url)
            .send()
            .await
            .map_err(|e| Error::http_with_source("list request failed", e))?;
        Self::check_status(&response)?;
        let body = response
            .text()
            .await
            .map_err(|e| Error::http_with_source("failed to read list response body", e))?;
        // A body that is not a valid item list is a permanent decode
        // failure, not a transport error.
        Ok(serde_json::from_str(&body)?)
    }

    async fn create(&self, item: &Item) -> Result<()> {
        tracing::debug!(id = %item.id, "creating item");
        let response = self
            .client
            .post(&self.config.base_url)
            .json(item)
            .send()
            .await
            .map_err(|e| Error::http_with_source("create request failed", e))?;
        Self::check_status(&response)
    }

    async fn set_checked(&self, id: ItemId, checked: bool) -> Result<()> {
        tracing::debug!(%id, checked, "updating item");
        let response = self
            .client
            .patch(self.config.item_url(id))
            .json(&json!({ "checked": checked }))
            .send()
            .await
            .map_err(|e| Error::http_with_source("update request failed", e))?;
        Self::check_status(&response)
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        tracing::debug!(%id, "deleting item");
        let response = self
            .client
            .delete(self.config.item_url(id))
            .send()
            .await
            .map_err(|e| Error::http_with_source("delete request failed", e))?;
        Self::check_status(&response)
    }
}
