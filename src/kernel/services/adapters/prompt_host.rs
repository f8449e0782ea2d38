//! Host implementation for a plain terminal.
//!
//! Dialogs print a prompt and wait for the next answer line; files go through `tokio::fs`.
//! Menu events are delivered through an in-process `EventHub`.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Mutex;

use crate::core::{EventHandler, EventHub, SubscriptionId};
use crate::kernel::services::ports::{FileHandle, HostApi, HostError, HostResult, SaveRequest};

pub type Printer = Arc<dyn Fn(&str) + Send + Sync>;

pub struct PromptHost {
    answers: Mutex<UnboundedReceiver<String>>,
    events: EventHub,
    print: Printer,
    base_dir: PathBuf,
}

impl PromptHost {
    pub fn new(answers: UnboundedReceiver<String>, print: Printer) -> Self {
        Self {
            answers: Mutex::new(answers),
            events: EventHub::new(),
            print,
            base_dir: PathBuf::new(),
        }
    }

    /// Prints to stdout.
    pub fn stdio(answers: UnboundedReceiver<String>) -> Self {
        Self::new(answers, Arc::new(|line| println!("{line}")))
    }

    /// Relative paths typed at a prompt resolve against `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Fires a menu event as the native menu would.
    pub fn emit(&self, event: &str) -> usize {
        let delivered = self.events.emit(event);
        if delivered == 0 {
            tracing::debug!(event, "menu event has no listener");
        }
        delivered
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.events.listener_count(event)
    }

    async fn ask(&self, prompt: &str) -> Option<String> {
        (self.print)(prompt);
        let answer = self.answers.lock().await.recv().await?;
        let answer = answer.trim();
        (!answer.is_empty()).then(|| answer.to_string())
    }

    /// The identity a typed path gets once opened here: joined to the base dir, `.` dropped.
    pub fn resolve(&self, typed: impl AsRef<Path>) -> PathBuf {
        self.base_dir
            .join(typed.as_ref())
            .components()
            .filter(|part| !matches!(part, Component::CurDir))
            .collect()
    }
}

fn io_error(path: &Path, error: std::io::Error) -> HostError {
    HostError::Io {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[async_trait]
impl HostApi for PromptHost {
    async fn read_file(&self, path: &Path) -> HostResult<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| io_error(path, e))
    }

    async fn save_file(&self, request: &SaveRequest) -> HostResult<FileHandle> {
        let path = match &request.file {
            Some(path) => path.clone(),
            None => {
                let typed = self.ask("Save as:").await.ok_or(HostError::Cancelled)?;
                self.resolve(&typed)
            }
        };
        tokio::fs::write(&path, request.content.as_bytes())
            .await
            .map_err(|e| io_error(&path, e))?;
        Ok(FileHandle::new(path, request.content.clone()))
    }

    async fn open_file(&self) -> HostResult<FileHandle> {
        let typed = self.ask("Open file:").await.ok_or(HostError::Cancelled)?;
        let path = self.resolve(&typed);
        let content = self.read_file(&path).await?;
        Ok(FileHandle::new(path, content))
    }

    async fn confirm_dialog(&self, message: &str) -> bool {
        let answer = self.ask(&format!("{message} [y/N]")).await;
        matches!(
            answer.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("y" | "yes")
        )
    }

    async fn interpreter_dialog(&self, message: &str) -> Option<String> {
        self.ask(message).await
    }

    async fn alert(&self, message: &str) {
        (self.print)(&format!("! {message}"));
    }

    fn subscribe(&self, event: &str, handler: EventHandler) -> SubscriptionId {
        self.events.subscribe(event, handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/prompt_host.rs"]
mod tests;
