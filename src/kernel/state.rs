use std::path::PathBuf;

use super::preferences::Preferences;
use super::session::SessionState;
use super::terminal::TerminalOutputModel;

/// Transition waiting on a discard confirmation from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    NewDocument,
    SelectExisting(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_collapsed: bool,
    pub terminal_open: bool,
    pub preferences_open: bool,
    pub alert: Option<String>,
}

#[derive(Debug)]
pub struct AppState {
    pub session: SessionState,
    pub preferences: Preferences,
    pub terminal: TerminalOutputModel,
    pub ui: UiState,
}

impl AppState {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            session: SessionState::new(),
            preferences,
            terminal: TerminalOutputModel::new(),
            ui: UiState::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}
