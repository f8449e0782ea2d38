//! Configuration service adapters: the HTTP endpoint and an in-process store.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Mutex;

use super::http::{check_status, read_json, transport};
use crate::kernel::services::ports::{ConfigurationService, RemoteConfig, RemoteError};

/// `GET` reads `{path_first, path_second}`, `POST` replaces it.
#[derive(Debug, Clone)]
pub struct HttpConfigurationService {
    client: Client,
    endpoint: String,
}

impl HttpConfigurationService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ConfigurationService for HttpConfigurationService {
    async fn fetch(&self) -> Result<RemoteConfig, RemoteError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn push(&self, config: &RemoteConfig) -> Result<(), RemoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(config)
            .send()
            .await
            .map_err(transport)?;
        check_status(response)?;
        tracing::debug!(endpoint = %self.endpoint, "configuration pushed");
        Ok(())
    }
}

/// Keeps the configuration in memory. Used when no endpoint is configured.
#[derive(Debug, Default)]
pub struct MemoryConfigurationService {
    stored: Mutex<RemoteConfig>,
}

impl MemoryConfigurationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RemoteConfig) -> Self {
        Self {
            stored: Mutex::new(config),
        }
    }

    pub fn snapshot(&self) -> RemoteConfig {
        self.stored
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl ConfigurationService for MemoryConfigurationService {
    async fn fetch(&self) -> Result<RemoteConfig, RemoteError> {
        Ok(self.snapshot())
    }

    async fn push(&self, config: &RemoteConfig) -> Result<(), RemoteError> {
        *self
            .stored
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = config.clone();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
