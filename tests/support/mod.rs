#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use quill::app::Shell;
use quill::core::{EventHandler, EventHub, SubscriptionId};
use quill::kernel::services::adapters::MemoryConfigurationService;
use quill::kernel::services::ports::{
    ConfigurationService, ExecutionRequest, ExecutionResult, ExecutionRunner, FileHandle,
    HostApi, HostError, HostResult, RemoteConfig, RemoteError, SaveRequest,
};
use quill::kernel::Preferences;

/// Scriptable host: an in-memory disk plus queued dialog answers.
#[derive(Default)]
pub struct FakeHost {
    disk: Mutex<HashMap<PathBuf, String>>,
    saves: Mutex<Vec<SaveRequest>>,
    save_as_target: Mutex<Option<PathBuf>>,
    save_error: Mutex<Option<HostError>>,
    open_target: Mutex<Option<PathBuf>>,
    confirms: Mutex<VecDeque<bool>>,
    confirm_messages: Mutex<Vec<String>>,
    interpreter_answer: Mutex<Option<String>>,
    alerts: Mutex<Vec<String>>,
    events: EventHub,
}

impl FakeHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn write(&self, path: impl Into<PathBuf>, content: &str) {
        self.disk
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
    }

    pub fn disk(&self, path: impl AsRef<Path>) -> Option<String> {
        self.disk.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.disk.lock().unwrap().remove(path.as_ref());
    }

    pub fn save_as_answer(&self, path: impl Into<PathBuf>) {
        *self.save_as_target.lock().unwrap() = Some(path.into());
    }

    pub fn fail_saves(&self, error: HostError) {
        *self.save_error.lock().unwrap() = Some(error);
    }

    pub fn open_answer(&self, path: impl Into<PathBuf>) {
        *self.open_target.lock().unwrap() = Some(path.into());
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirms.lock().unwrap().push_back(answer);
    }

    pub fn interpreter_answer(&self, answer: Option<&str>) {
        *self.interpreter_answer.lock().unwrap() = answer.map(str::to_string);
    }

    pub fn saves(&self) -> Vec<SaveRequest> {
        self.saves.lock().unwrap().clone()
    }

    pub fn confirm_messages(&self) -> Vec<String> {
        self.confirm_messages.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn emit(&self, event: &str) -> usize {
        self.events.emit(event)
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.events.listener_count(event)
    }
}

#[async_trait]
impl HostApi for FakeHost {
    async fn read_file(&self, path: &Path) -> HostResult<String> {
        self.disk(path).ok_or_else(|| HostError::Io {
            path: path.to_path_buf(),
            message: "no such file".to_string(),
        })
    }

    async fn save_file(&self, request: &SaveRequest) -> HostResult<FileHandle> {
        if let Some(error) = self.save_error.lock().unwrap().clone() {
            return Err(error);
        }
        let path = match &request.file {
            Some(path) => path.clone(),
            None => self
                .save_as_target
                .lock()
                .unwrap()
                .clone()
                .ok_or(HostError::Cancelled)?,
        };
        self.saves.lock().unwrap().push(request.clone());
        self.write(path.clone(), &request.content);
        Ok(FileHandle::new(path, request.content.clone()))
    }

    async fn open_file(&self) -> HostResult<FileHandle> {
        let path = self
            .open_target
            .lock()
            .unwrap()
            .clone()
            .ok_or(HostError::Cancelled)?;
        let content = self.read_file(&path).await?;
        Ok(FileHandle::new(path, content))
    }

    async fn confirm_dialog(&self, message: &str) -> bool {
        self.confirm_messages
            .lock()
            .unwrap()
            .push(message.to_string());
        self.confirms.lock().unwrap().pop_front().unwrap_or(false)
    }

    async fn interpreter_dialog(&self, _message: &str) -> Option<String> {
        self.interpreter_answer.lock().unwrap().clone()
    }

    async fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn subscribe(&self, event: &str, handler: EventHandler) -> SubscriptionId {
        self.events.subscribe(event, handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}

/// Configuration service that is never reachable.
#[derive(Default)]
pub struct OfflineConfiguration {
    pushes: Mutex<usize>,
}

impl OfflineConfiguration {
    pub fn pushes(&self) -> usize {
        *self.pushes.lock().unwrap()
    }
}

#[async_trait]
impl ConfigurationService for OfflineConfiguration {
    async fn fetch(&self) -> Result<RemoteConfig, RemoteError> {
        Err(RemoteError::Transport("connection refused".to_string()))
    }

    async fn push(&self, _config: &RemoteConfig) -> Result<(), RemoteError> {
        *self.pushes.lock().unwrap() += 1;
        Err(RemoteError::Transport("connection refused".to_string()))
    }
}

#[derive(Default)]
pub struct FakeRunner {
    requests: Mutex<Vec<ExecutionRequest>>,
    reply: Mutex<Option<Result<ExecutionResult, RemoteError>>>,
}

impl FakeRunner {
    pub fn replying(reply: Result<ExecutionResult, RemoteError>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Mutex::new(Some(reply)),
        })
    }

    pub fn requests(&self) -> Vec<ExecutionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExecutionRunner for FakeRunner {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, RemoteError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(ExecutionResult::default()))
    }
}

pub fn shell_with(host: Arc<FakeHost>) -> Shell {
    Shell::new(
        host,
        Arc::new(MemoryConfigurationService::new()),
        Arc::new(FakeRunner::default()),
        Preferences::default(),
    )
}

pub fn open(shell: &mut Shell, host: &FakeHost, path: &str, content: &str) {
    host.write(path, content);
    shell.open_or_focus(FileHandle::new(path, content));
}
