use async_trait::async_trait;
use reqwest::Client;

use super::http::{read_json, transport};
use crate::kernel::services::ports::{
    ExecutionRequest, ExecutionResult, ExecutionRunner, RemoteError,
};

/// Posts `{interpreter, file}` and reads back `{success, output, error}`.
#[derive(Debug, Clone)]
pub struct HttpExecutionRunner {
    client: Client,
    endpoint: String,
}

impl HttpExecutionRunner {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ExecutionRunner for HttpExecutionRunner {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, RemoteError> {
        tracing::info!(
            interpreter = %request.interpreter,
            file = %request.file.display(),
            "execution requested"
        );
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}

/// Stand-in when no execution endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredRunner;

#[async_trait]
impl ExecutionRunner for UnconfiguredRunner {
    async fn execute(&self, _request: &ExecutionRequest) -> Result<ExecutionResult, RemoteError> {
        Err(RemoteError::Transport(
            "no execution endpoint configured".to_string(),
        ))
    }
}
