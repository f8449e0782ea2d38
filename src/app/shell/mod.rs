//! Async driver around the kernel store.
//!
//! `Shell` owns the only `Store`; every mutation goes through `&mut Shell`, so a suspended
//! save or select cannot be re-entered while it waits on the host.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::{RunError, SaveError};
use crate::core::Command;
use crate::kernel::services::ports::{
    ConfigurationService, ExecutionRequest, ExecutionRunner, FileHandle, HostApi,
};
use crate::kernel::services::{KernelBusReceiver, KernelMessage};
use crate::kernel::{
    Action, AppState, Document, InterpreterSlot, Preferences, RunKey, Store, TerminalOutput,
    Theme,
};

mod bridge;

pub struct Shell {
    store: Store,
    host: Arc<dyn HostApi>,
    configuration: Arc<dyn ConfigurationService>,
    runner: Arc<dyn ExecutionRunner>,
}

impl Shell {
    pub fn new(
        host: Arc<dyn HostApi>,
        configuration: Arc<dyn ConfigurationService>,
        runner: Arc<dyn ExecutionRunner>,
        preferences: Preferences,
    ) -> Self {
        Self {
            store: Store::new(AppState::new(preferences)),
            host,
            configuration,
            runner,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn host(&self) -> &Arc<dyn HostApi> {
        &self.host
    }

    pub fn title(&self) -> &str {
        self.state().session.title()
    }

    /// Pulls interpreter paths from the configuration service; failures keep local values.
    pub async fn load_preferences(&mut self) -> bool {
        self.dispatch(Action::LoadPreferences).await
    }

    pub fn open_or_focus(&mut self, handle: FileHandle) -> bool {
        self.apply(Action::OpenOrFocus(handle))
    }

    /// Host open dialog, then `open_or_focus` with the chosen file.
    pub async fn open_file(&mut self) -> bool {
        self.dispatch(Action::RunCommand(Command::OpenFile)).await
    }

    /// Re-reads `path` from disk and makes it current. Unknown paths are ignored.
    pub async fn select_existing(&mut self, path: impl Into<PathBuf>) -> bool {
        self.dispatch(Action::SelectExisting(path.into())).await
    }

    /// Like `select_existing`, but asks first when the re-read would drop unsaved edits.
    pub async fn request_select(&mut self, path: impl Into<PathBuf>) -> bool {
        self.dispatch(Action::RequestSelect(path.into())).await
    }

    pub fn new_document(&mut self) -> bool {
        self.apply(Action::NewDocument)
    }

    /// Like `new_document`, but asks first when the current document is dirty.
    pub async fn request_new_document(&mut self) -> bool {
        self.dispatch(Action::RequestNewDocument).await
    }

    pub fn update_content(&mut self, text: impl Into<String>) -> bool {
        self.apply(Action::UpdateContent(text.into()))
    }

    /// Persists the current document. Host failures are also raised as an alert; the
    /// document stays dirty on every error path.
    pub async fn save(&mut self) -> Result<Document, SaveError> {
        let request = self
            .state()
            .session
            .save_request()
            .ok_or(SaveError::NoDocument)?;

        let saved = match self.host.save_file(&request).await {
            Ok(saved) => saved,
            Err(e) => {
                let error = SaveError::from(e);
                if let SaveError::Failed(reason) = &error {
                    self.drive(Action::SaveFailed {
                        reason: reason.to_string(),
                    })
                    .await;
                }
                return Err(error);
            }
        };

        let path = request.file.clone().unwrap_or_else(|| saved.path.clone());
        self.drive(Action::FileSaved { request, saved }).await;
        tracing::info!(path = %path.display(), "file saved");
        self.state()
            .session
            .document(&path)
            .cloned()
            .ok_or(SaveError::NoDocument)
    }

    /// Asks the host, then removes the document. Returns whether it was removed.
    pub async fn close(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if !self.state().session.contains(path) {
            return false;
        }
        self.dispatch(Action::Close(path.to_path_buf())).await;
        !self.state().session.contains(path)
    }

    /// Header close button: drops the current selection, keeps the registry.
    pub fn close_current(&mut self) -> bool {
        self.apply(Action::CloseCurrent)
    }

    pub async fn pick_interpreter(&mut self, slot: InterpreterSlot) -> bool {
        self.dispatch(Action::PickInterpreter(slot)).await
    }

    pub async fn commit_preferences(&mut self, preferences: Preferences) -> bool {
        self.dispatch(Action::CommitPreferences(preferences)).await
    }

    pub fn close_preferences(&mut self) -> bool {
        self.apply(Action::ClosePreferences)
    }

    pub fn set_theme(&mut self, theme: Theme) -> bool {
        self.apply(Action::SetTheme(theme))
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.apply(Action::DismissAlert)
    }

    /// Runs the current file with the interpreter bound to `key`.
    ///
    /// Rejected up front while `key` is busy, without an interpreter, or without a saved file.
    /// Once dispatched, busy is cleared and the output recorded whatever the runner returns.
    pub async fn run(&mut self, key: RunKey) -> Result<TerminalOutput, RunError> {
        let state = self.state();
        if state.terminal.is_busy(key) {
            return Err(RunError::Busy(key));
        }
        let slot = key.interpreter_slot();
        let interpreter = state.preferences.interpreter(slot).trim().to_string();
        if interpreter.is_empty() {
            return Err(RunError::MissingInterpreter(slot));
        }
        let file = state
            .session
            .current_path()
            .ok_or(RunError::NoFile)?
            .to_path_buf();

        self.apply(Action::RunStarted(key));
        let request = ExecutionRequest { interpreter, file };
        let output = match self.runner.execute(&request).await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(key = key.name(), error = %e, "execution request failed");
                TerminalOutput::failure(e.to_string())
            }
        };
        self.apply(Action::RunFinished {
            key,
            output: output.clone(),
        });
        Ok(output)
    }

    pub async fn handle_command(&mut self, command: Command) -> bool {
        tracing::debug!(command = command.name(), "host command");
        self.dispatch(Action::RunCommand(command)).await
    }

    /// `save` for the menu path, where the error has already been alerted or is silent.
    async fn save_command(&mut self) -> bool {
        match self.save().await {
            Ok(_) => true,
            Err(SaveError::Cancelled | SaveError::NoDocument) => false,
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                true
            }
        }
    }

    pub async fn handle_message(&mut self, message: KernelMessage) -> bool {
        match message {
            KernelMessage::Command(command) => self.handle_command(command).await,
            KernelMessage::Action(action) => self.dispatch(action).await,
        }
    }

    /// Handles everything already queued on the bus. Returns how many messages were handled.
    pub async fn pump(&mut self, rx: &mut KernelBusReceiver) -> usize {
        let mut handled = 0;
        while let Ok(message) = rx.try_recv() {
            self.handle_message(message).await;
            handled += 1;
        }
        handled
    }
}
