//! Host-originated commands.
//!
//! - `Command`: semantic command (independent of the native menu that raised it)
//! - event names are the wire names the host runtime emits

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    NewFile,
    OpenFile,
    SaveFile,
    OpenPreferences,
    ToggleSidebar,
    ToggleTerminal,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::NewFile,
        Command::OpenFile,
        Command::SaveFile,
        Command::OpenPreferences,
        Command::ToggleSidebar,
        Command::ToggleTerminal,
    ];

    pub fn event_name(self) -> &'static str {
        match self {
            Command::NewFile => "event-open-new-file",
            Command::OpenFile => "event-open-file",
            Command::SaveFile => "event-save-file",
            Command::OpenPreferences => "event-settings-preferences",
            Command::ToggleSidebar => "event-toggleSidebar",
            Command::ToggleTerminal => "event-terminal",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::NewFile => "newFile",
            Command::OpenFile => "openFile",
            Command::SaveFile => "saveFile",
            Command::OpenPreferences => "openPreferences",
            Command::ToggleSidebar => "toggleSidebar",
            Command::ToggleTerminal => "toggleTerminal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
