//! Line commands for the terminal front end.
//!
//! Lines starting with `:` are commands; every other line answers the pending dialog.

use std::num::NonZeroU16;
use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::{AppState, InterpreterSlot, RunKey, Theme};

pub const HELP: &str = "\
:new | :open | :save | :settings | :sidebar | :terminal   menu commands
:select <path>      re-read an open file and make it current
:close [path]       close a file (asks first); without a path, clear the editor
:append <text>      append a line to the current document
:run [1|2]          run the current file with the first or second interpreter
:pick 1|2           choose an interpreter path
:commit             save preferences (pushes interpreter paths)
:font <size>        set and commit the font size
:theme <name>       oneDark | dracula | eclipse
:status | :help | :quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Menu(Command),
    Select(PathBuf),
    Close(Option<PathBuf>),
    Append(String),
    Run(RunKey),
    Pick(InterpreterSlot),
    Commit,
    Font(NonZeroU16),
    Theme(Theme),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("not a command")]
    NotACommand,
    #[error("unknown command :{0} (try :help)")]
    Unknown(String),
    #[error(":{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid argument for :{command}: {value}")]
    InvalidArgument { command: &'static str, value: String },
}

pub fn is_command(line: &str) -> bool {
    line.trim_start().starts_with(':')
}

pub fn parse(line: &str) -> Result<ReplCommand, ParseError> {
    let body = line
        .trim()
        .strip_prefix(':')
        .ok_or(ParseError::NotACommand)?;
    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (body, ""),
    };
    let arg = (!rest.is_empty()).then_some(rest);

    let command = match name {
        "new" => ReplCommand::Menu(Command::NewFile),
        "open" => ReplCommand::Menu(Command::OpenFile),
        "save" => ReplCommand::Menu(Command::SaveFile),
        "settings" => ReplCommand::Menu(Command::OpenPreferences),
        "sidebar" => ReplCommand::Menu(Command::ToggleSidebar),
        "terminal" => ReplCommand::Menu(Command::ToggleTerminal),
        "select" => ReplCommand::Select(PathBuf::from(
            arg.ok_or(ParseError::MissingArgument("select"))?,
        )),
        "close" => ReplCommand::Close(arg.map(PathBuf::from)),
        // Keep the raw remainder so leading spaces survive.
        "append" => ReplCommand::Append(
            body.strip_prefix("append")
                .and_then(|text| text.strip_prefix(' '))
                .unwrap_or("")
                .to_string(),
        ),
        "run" => ReplCommand::Run(match arg {
            None | Some("1") => RunKey::Primary,
            Some("2") => RunKey::Secondary,
            Some(other) => RunKey::from_name(other).ok_or_else(|| invalid("run", other))?,
        }),
        "pick" => ReplCommand::Pick(match arg {
            Some("1") => InterpreterSlot::Primary,
            Some("2") => InterpreterSlot::Secondary,
            Some(other) => return Err(invalid("pick", other)),
            None => return Err(ParseError::MissingArgument("pick")),
        }),
        "commit" => ReplCommand::Commit,
        "font" => {
            let value = arg.ok_or(ParseError::MissingArgument("font"))?;
            ReplCommand::Font(value.parse().map_err(|_| invalid("font", value))?)
        }
        "theme" => {
            let value = arg.ok_or(ParseError::MissingArgument("theme"))?;
            ReplCommand::Theme(Theme::from_name(value).ok_or_else(|| invalid("theme", value))?)
        }
        "status" => ReplCommand::Status,
        "help" => ReplCommand::Help,
        "quit" | "q" => ReplCommand::Quit,
        other => match Command::from_name(other) {
            Some(command) => ReplCommand::Menu(command),
            None => return Err(ParseError::Unknown(other.to_string())),
        },
    };
    Ok(command)
}

fn invalid(command: &'static str, value: &str) -> ParseError {
    ParseError::InvalidArgument {
        command,
        value: value.to_string(),
    }
}

/// Text rendition of the view state.
pub fn render_status(state: &AppState) -> Vec<String> {
    let session = &state.session;
    let mut lines = Vec::new();

    let marker = if session.is_dirty() { " *" } else { "" };
    lines.push(format!("== {}{marker}", session.title()));

    if !state.ui.sidebar_collapsed {
        for doc in session.documents() {
            let current = doc.path.as_deref() == session.current_path();
            let pointer = if current { ">" } else { " " };
            let dirty = if doc.dirty { " *" } else { "" };
            lines.push(format!("{pointer} {}{dirty}", doc.display_name));
        }
    }

    if let Some(doc) = session.current_document() {
        lines.extend(doc.content.lines().map(|line| format!("| {line}")));
    }

    let prefs = &state.preferences;
    lines.push(format!(
        "theme {} | font {} | interpreters [{}] [{}]",
        prefs.theme.label(),
        prefs.font_size,
        prefs.interpreter_path_primary,
        prefs.interpreter_path_secondary,
    ));
    if state.ui.preferences_open {
        lines.push("preferences open (:pick, :font, :commit)".to_string());
    }

    if state.ui.terminal_open {
        let output = state.terminal.output();
        for key in RunKey::ALL {
            if state.terminal.is_busy(key) {
                lines.push(format!("[{}] running", key.name()));
            }
        }
        lines.extend(output.output.lines().map(|line| format!("$ {line}")));
        if !output.success {
            lines.extend(output.error.lines().map(|line| format!("$! {line}")));
        }
    }

    if let Some(alert) = &state.ui.alert {
        lines.push(format!("! {alert}"));
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/app/repl.rs"]
mod tests;
