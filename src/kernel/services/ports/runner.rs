use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::config::RemoteError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub interpreter: String,
    pub file: PathBuf,
}

/// Result record handed back by the execution runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub error: String,
}

impl ExecutionResult {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: error.into(),
        }
    }
}

impl Default for ExecutionResult {
    fn default() -> Self {
        Self {
            success: true,
            output: String::new(),
            error: String::new(),
        }
    }
}

#[async_trait]
pub trait ExecutionRunner: Send + Sync {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, RemoteError>;
}
