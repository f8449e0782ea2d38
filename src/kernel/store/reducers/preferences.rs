use crate::kernel::{Action, Effect};

impl crate::kernel::Store {
    pub(in crate::kernel::store) fn reduce_preferences_action(
        &mut self,
        action: Action,
    ) -> (bool, Vec<Effect>) {
        match action {
            Action::LoadPreferences => (false, vec![Effect::FetchPreferences]),
            Action::PreferencesFetched(remote) => {
                (self.state.preferences.apply_remote(remote), Vec::new())
            }
            Action::PickInterpreter(slot) => (false, vec![Effect::ShowInterpreterDialog(slot)]),
            Action::InterpreterPicked { slot, path } => {
                let path = path.trim();
                if path.is_empty() {
                    return (false, Vec::new());
                }
                (
                    self.state.preferences.set_interpreter(slot, path.to_string()),
                    Vec::new(),
                )
            }
            Action::CommitPreferences(prefs) => {
                let push = Effect::PushPreferences(prefs.remote_config());
                let mut changed = self.state.preferences != prefs;
                self.state.preferences = prefs;
                changed |= std::mem::replace(&mut self.state.ui.preferences_open, false);
                (changed, vec![push])
            }
            Action::ClosePreferences => (
                std::mem::replace(&mut self.state.ui.preferences_open, false),
                Vec::new(),
            ),
            Action::SetTheme(theme) => {
                let changed = self.state.preferences.theme != theme;
                self.state.preferences.theme = theme;
                (changed, Vec::new())
            }
            other => {
                tracing::error!(action = ?other, "non-preferences action passed to reduce_preferences_action");
                (false, Vec::new())
            }
        }
    }
}
