use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::preferences::{InterpreterSlot, Preferences, Theme};
use crate::kernel::services::ports::{FileHandle, HostError, RemoteConfig, SaveRequest};
use crate::kernel::state::PendingAction;
use crate::kernel::terminal::{RunKey, TerminalOutput};

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    OpenOrFocus(FileHandle),
    /// Guarded select: asks before a fresh read overwrites unsaved edits.
    RequestSelect(PathBuf),
    SelectExisting(PathBuf),
    FileRead {
        path: PathBuf,
        result: Result<String, HostError>,
    },
    /// Guarded new file: asks before dropping unsaved edits.
    RequestNewDocument,
    NewDocument,
    UpdateContent(String),
    FileSaved {
        request: SaveRequest,
        saved: FileHandle,
    },
    SaveFailed {
        reason: String,
    },
    Close(PathBuf),
    CloseConfirmed {
        path: PathBuf,
        confirmed: bool,
    },
    CloseCurrent,
    DiscardConfirmed {
        pending: PendingAction,
        confirmed: bool,
    },
    ReportError(String),
    DismissAlert,
    LoadPreferences,
    PreferencesFetched(RemoteConfig),
    PickInterpreter(InterpreterSlot),
    InterpreterPicked {
        slot: InterpreterSlot,
        path: String,
    },
    CommitPreferences(Preferences),
    ClosePreferences,
    SetTheme(Theme),
    RunStarted(RunKey),
    RunFinished {
        key: RunKey,
        output: TerminalOutput,
    },
}
