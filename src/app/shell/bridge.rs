use std::collections::VecDeque;

use super::Shell;
use crate::core::Command;
use crate::kernel::services::ports::HostError;
use crate::kernel::{Action, Effect};

impl Shell {
    /// Reduces `action`, then runs its effects against the ports and feeds their outcomes
    /// back in until nothing is left. Returns whether any step changed state.
    ///
    /// A save command is handed to `Shell::save` so every save takes the same path.
    pub async fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::RunCommand(Command::SaveFile) => self.save_command().await,
            action => self.drive(action).await,
        }
    }

    pub(super) async fn drive(&mut self, action: Action) -> bool {
        let mut queue = VecDeque::from([action]);
        let mut state_changed = false;
        while let Some(action) = queue.pop_front() {
            let result = self.store.dispatch(action);
            state_changed |= result.state_changed;
            for effect in result.effects {
                if let Some(next) = self.run_effect(effect).await {
                    queue.push_back(next);
                }
            }
        }
        state_changed
    }

    /// Dispatch for actions that never produce effects.
    pub(super) fn apply(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        debug_assert!(result.effects.is_empty(), "unexpected effects: {:?}", result.effects);
        result.state_changed
    }

    async fn run_effect(&self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::ReadFile(path) => {
                let result = self.host.read_file(&path).await;
                Some(Action::FileRead { path, result })
            }
            Effect::ShowOpenDialog => match self.host.open_file().await {
                Ok(handle) => Some(Action::OpenOrFocus(handle)),
                Err(HostError::Cancelled) => None,
                Err(e) => Some(Action::ReportError(format!(
                    "Error while opening the file: {e}"
                ))),
            },
            Effect::ConfirmClose { path, message } => {
                let confirmed = self.host.confirm_dialog(&message).await;
                Some(Action::CloseConfirmed { path, confirmed })
            }
            Effect::ConfirmDiscard { message, pending } => {
                let confirmed = self.host.confirm_dialog(&message).await;
                Some(Action::DiscardConfirmed { pending, confirmed })
            }
            Effect::ShowInterpreterDialog(slot) => self
                .host
                .interpreter_dialog(slot.prompt())
                .await
                .map(|path| Action::InterpreterPicked { slot, path }),
            Effect::FetchPreferences => match self.configuration.fetch().await {
                Ok(config) => Some(Action::PreferencesFetched(config)),
                Err(e) => {
                    tracing::warn!(error = %e, "configuration fetch failed, keeping local preferences");
                    None
                }
            },
            Effect::PushPreferences(config) => {
                if let Err(e) = self.configuration.push(&config).await {
                    tracing::warn!(error = %e, "configuration push failed");
                }
                None
            }
            Effect::Alert(message) => {
                self.host.alert(&message).await;
                None
            }
        }
    }
}
