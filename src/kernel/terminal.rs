use rustc_hash::FxHashMap;

use super::preferences::InterpreterSlot;
use crate::kernel::services::ports::ExecutionResult;

/// Output panel contents; replaced wholesale by every finished run.
pub type TerminalOutput = ExecutionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKey {
    Primary,
    Secondary,
}

impl RunKey {
    pub const ALL: [RunKey; 2] = [RunKey::Primary, RunKey::Secondary];

    pub fn name(self) -> &'static str {
        match self {
            RunKey::Primary => "run-primary",
            RunKey::Secondary => "run-secondary",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn interpreter_slot(self) -> InterpreterSlot {
        match self {
            RunKey::Primary => InterpreterSlot::Primary,
            RunKey::Secondary => InterpreterSlot::Secondary,
        }
    }
}

#[derive(Debug, Default)]
pub struct TerminalOutputModel {
    output: TerminalOutput,
    busy: FxHashMap<RunKey, bool>,
}

impl TerminalOutputModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &TerminalOutput {
        &self.output
    }

    pub fn is_busy(&self, key: RunKey) -> bool {
        self.busy.get(&key).copied().unwrap_or(false)
    }

    pub fn set_busy(&mut self, key: RunKey, busy: bool) -> bool {
        let prev = self.busy.insert(key, busy).unwrap_or(false);
        prev != busy
    }

    pub fn record_result(&mut self, output: TerminalOutput) -> bool {
        if self.output == output {
            return false;
        }
        self.output = output;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/terminal.rs"]
mod tests;
