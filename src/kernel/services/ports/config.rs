//! Remote configuration service contract.
//!
//! Only the interpreter paths live remotely; font size and theme stay local.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default)]
    pub path_first: Option<String>,
    #[serde(default)]
    pub path_second: Option<String>,
}

impl RemoteConfig {
    pub fn new(path_first: impl Into<String>, path_second: impl Into<String>) -> Self {
        Self {
            path_first: Some(path_first.into()),
            path_second: Some(path_second.into()),
        }
    }
}

#[async_trait]
pub trait ConfigurationService: Send + Sync {
    async fn fetch(&self) -> Result<RemoteConfig, RemoteError>;

    async fn push(&self, config: &RemoteConfig) -> Result<(), RemoteError>;
}
