use crate::kernel::services::ports::HostError;
use crate::kernel::{InterpreterSlot, RunKey};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("no document to save")]
    NoDocument,
    /// Save-as dialog dismissed; not reported to the user.
    #[error("save cancelled")]
    Cancelled,
    #[error("failed to save file: {0}")]
    Failed(HostError),
}

impl From<HostError> for SaveError {
    fn from(error: HostError) -> Self {
        match error {
            HostError::Cancelled => SaveError::Cancelled,
            other => SaveError::Failed(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error("{} is already running", .0.name())]
    Busy(RunKey),
    #[error("no interpreter configured for the {0:?} slot")]
    MissingInterpreter(InterpreterSlot),
    #[error("save the file before running it")]
    NoFile,
}
