use crate::kernel::{Action, Effect};

impl crate::kernel::Store {
    pub(in crate::kernel::store) fn reduce_terminal_action(
        &mut self,
        action: Action,
    ) -> (bool, Vec<Effect>) {
        match action {
            Action::RunStarted(key) => {
                if self.state.terminal.is_busy(key) {
                    tracing::debug!(key = key.name(), "run ignored, already busy");
                    return (false, Vec::new());
                }
                (self.state.terminal.set_busy(key, true), Vec::new())
            }
            Action::RunFinished { key, output } => {
                let mut changed = self.state.terminal.set_busy(key, false);
                changed |= self.state.terminal.record_result(output);
                if !self.state.ui.terminal_open {
                    self.state.ui.terminal_open = true;
                    changed = true;
                }
                (changed, Vec::new())
            }
            other => {
                tracing::error!(action = ?other, "non-terminal action passed to reduce_terminal_action");
                (false, Vec::new())
            }
        }
    }
}
