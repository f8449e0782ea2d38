//! Host runtime capabilities: file dialogs, disk access, prompts, native menu events.
//!
//! The host speaks in `{ success, ..., error? }` records; `into_result` converts them at the
//! boundary so the kernel only ever sees `HostResult`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{EventHandler, SubscriptionId};

pub type HostResult<T> = std::result::Result<T, HostError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The user dismissed a dialog without choosing anything.
    #[error("dialog cancelled")]
    Cancelled,
    #[error("{0}")]
    Rejected(String),
    #[error("{path}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("host unavailable: {0}")]
    Unavailable(String),
}

/// A file as the host hands it over: where it lives, its label and its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub path: PathBuf,
    pub name: String,
    pub content: String,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let name = display_name_for(&path);
        Self {
            path,
            name,
            content: content.into(),
        }
    }
}

/// Request passed to `save_file`; `file == None` asks the host for a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub content: String,
}

impl SaveRequest {
    pub fn is_save_as(&self) -> bool {
        self.file.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadFileResponse {
    pub success: bool,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ReadFileResponse {
    pub fn into_result(self, path: &Path) -> HostResult<String> {
        if self.success {
            return Ok(self.content);
        }
        Err(HostError::Io {
            path: path.to_path_buf(),
            message: self
                .error
                .unwrap_or_else(|| "error while loading the file".to_string()),
        })
    }
}

/// Shared shape of the `saveFile` and `openFile` replies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub success: bool,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_path: Option<PathBuf>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl FileResponse {
    /// An unsuccessful reply without an error message means the user backed out of the dialog.
    pub fn into_result(self) -> HostResult<FileHandle> {
        if !self.success {
            return Err(match self.error {
                Some(error) if !error.is_empty() => HostError::Rejected(error),
                _ => HostError::Cancelled,
            });
        }
        let path = self
            .file_path
            .ok_or_else(|| HostError::Rejected("host reply is missing filePath".to_string()))?;
        let name = self
            .file_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| display_name_for(&path));
        Ok(FileHandle {
            path,
            name,
            content: self.content,
        })
    }
}

pub fn display_name_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[async_trait]
pub trait HostApi: Send + Sync {
    async fn read_file(&self, path: &Path) -> HostResult<String>;

    async fn save_file(&self, request: &SaveRequest) -> HostResult<FileHandle>;

    async fn open_file(&self) -> HostResult<FileHandle>;

    async fn confirm_dialog(&self, message: &str) -> bool;

    /// Interpreter chooser; `None` when nothing was picked.
    async fn interpreter_dialog(&self, message: &str) -> Option<String>;

    async fn alert(&self, message: &str);

    fn subscribe(&self, event: &str, handler: EventHandler) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/host.rs"]
mod tests;
