use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;

use crate::kernel::services::ports::RemoteConfig;

pub const DEFAULT_FONT_SIZE: NonZeroU16 = match NonZeroU16::new(18) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    OneDark,
    #[default]
    Dracula,
    Eclipse,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::OneDark, Theme::Dracula, Theme::Eclipse];

    pub fn name(self) -> &'static str {
        match self {
            Theme::OneDark => "oneDark",
            Theme::Dracula => "dracula",
            Theme::Eclipse => "eclipse",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::OneDark => "One Dark",
            Theme::Dracula => "Dracula",
            Theme::Eclipse => "Eclipse",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpreterSlot {
    Primary,
    Secondary,
}

impl InterpreterSlot {
    pub fn prompt(self) -> &'static str {
        match self {
            InterpreterSlot::Primary => "Select the first Python interpreter",
            InterpreterSlot::Secondary => "Select the second Python interpreter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub interpreter_path_primary: String,
    pub interpreter_path_secondary: String,
    pub font_size: NonZeroU16,
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            interpreter_path_primary: String::new(),
            interpreter_path_secondary: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            theme: Theme::default(),
        }
    }
}

impl Preferences {
    pub fn interpreter(&self, slot: InterpreterSlot) -> &str {
        match slot {
            InterpreterSlot::Primary => &self.interpreter_path_primary,
            InterpreterSlot::Secondary => &self.interpreter_path_secondary,
        }
    }

    pub fn set_interpreter(&mut self, slot: InterpreterSlot, path: String) -> bool {
        let field = match slot {
            InterpreterSlot::Primary => &mut self.interpreter_path_primary,
            InterpreterSlot::Secondary => &mut self.interpreter_path_secondary,
        };
        if *field == path {
            return false;
        }
        *field = path;
        true
    }

    /// The remotely persisted subset.
    pub fn remote_config(&self) -> RemoteConfig {
        RemoteConfig::new(
            self.interpreter_path_primary.clone(),
            self.interpreter_path_secondary.clone(),
        )
    }

    /// Absent remote paths keep the local value.
    pub fn apply_remote(&mut self, remote: RemoteConfig) -> bool {
        let mut changed = false;
        if let Some(path) = remote.path_first {
            changed |= self.set_interpreter(InterpreterSlot::Primary, path);
        }
        if let Some(path) = remote.path_second {
            changed |= self.set_interpreter(InterpreterSlot::Secondary, path);
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/preferences.rs"]
mod tests;
