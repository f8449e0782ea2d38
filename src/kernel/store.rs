use crate::core::Command;

use super::{Action, AppState, Effect};

mod reducers;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let (state_changed, effects) = match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            action @ (Action::LoadPreferences
            | Action::PreferencesFetched(_)
            | Action::PickInterpreter(_)
            | Action::InterpreterPicked { .. }
            | Action::CommitPreferences(_)
            | Action::ClosePreferences
            | Action::SetTheme(_)) => self.reduce_preferences_action(action),
            action @ (Action::RunStarted(_) | Action::RunFinished { .. }) => {
                self.reduce_terminal_action(action)
            }
            Action::ReportError(message) => self.raise_alert(message),
            Action::DismissAlert => (self.state.ui.alert.take().is_some(), Vec::new()),
            action => self.reduce_session_action(action),
        };

        if !effects.is_empty() {
            tracing::debug!(count = effects.len(), "dispatch produced effects");
        }

        DispatchResult {
            effects,
            state_changed,
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> (bool, Vec<Effect>) {
        match cmd {
            Command::NewFile => self.reduce_session_action(Action::RequestNewDocument),
            Command::OpenFile => (false, vec![Effect::ShowOpenDialog]),
            // Saving needs the host's reply to report back; `Shell::save` drives it.
            Command::SaveFile => {
                tracing::debug!("save command reached the store without a driver");
                (false, Vec::new())
            }
            Command::OpenPreferences => {
                let changed = !self.state.ui.preferences_open;
                self.state.ui.preferences_open = true;
                (changed, Vec::new())
            }
            Command::ToggleSidebar => {
                self.state.ui.sidebar_collapsed = !self.state.ui.sidebar_collapsed;
                (true, Vec::new())
            }
            Command::ToggleTerminal => {
                self.state.ui.terminal_open = !self.state.ui.terminal_open;
                (true, Vec::new())
            }
        }
    }

    /// Alerts are blocking on the host side; the latest one is also kept for the view.
    fn raise_alert(&mut self, message: String) -> (bool, Vec<Effect>) {
        self.state.ui.alert = Some(message.clone());
        (true, vec![Effect::Alert(message)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
