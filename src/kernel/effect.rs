use std::path::PathBuf;

use crate::kernel::preferences::InterpreterSlot;
use crate::kernel::services::ports::RemoteConfig;
use crate::kernel::state::PendingAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ReadFile(PathBuf),
    ShowOpenDialog,
    ConfirmClose {
        path: PathBuf,
        message: String,
    },
    ConfirmDiscard {
        message: String,
        pending: PendingAction,
    },
    ShowInterpreterDialog(InterpreterSlot),
    FetchPreferences,
    PushPreferences(RemoteConfig),
    Alert(String),
}
