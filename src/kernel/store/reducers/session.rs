use std::path::PathBuf;

use crate::kernel::session::{DiscardCheck, Transition};
use crate::kernel::state::PendingAction;
use crate::kernel::{Action, Effect};

impl crate::kernel::Store {
    pub(in crate::kernel::store) fn reduce_session_action(
        &mut self,
        action: Action,
    ) -> (bool, Vec<Effect>) {
        match action {
            Action::OpenOrFocus(handle) => (self.state.session.open_or_focus(handle), Vec::new()),
            Action::RequestSelect(path) => {
                if !self.state.session.contains(&path) {
                    return (false, Vec::new());
                }
                let check = self
                    .state
                    .session
                    .discard_check(&Transition::Select(path.clone()));
                self.guard(check, PendingAction::SelectExisting(path))
            }
            Action::SelectExisting(path) => self.select_existing(path),
            Action::FileRead { path, result } => match result {
                Ok(content) => (
                    self.state.session.focus_with_content(&path, content),
                    Vec::new(),
                ),
                Err(error) => {
                    tracing::warn!(path = %path.display(), error = %error, "read_file failed");
                    self.raise_alert(format!("Error while loading the file: {error}"))
                }
            },
            Action::RequestNewDocument => {
                let check = self.state.session.discard_check(&Transition::NewDocument);
                self.guard(check, PendingAction::NewDocument)
            }
            Action::NewDocument => (self.state.session.new_document(), Vec::new()),
            Action::UpdateContent(text) => (self.state.session.update_content(text), Vec::new()),
            Action::FileSaved { request, saved } => {
                let changed = match request.file {
                    Some(path) => self.state.session.mark_saved(&path, &request.content),
                    None => self.state.session.complete_save_as(saved),
                };
                (changed, Vec::new())
            }
            Action::SaveFailed { reason } => {
                self.raise_alert(format!("Failed to save file: {reason}"))
            }
            Action::Close(path) => {
                let Some(doc) = self.state.session.document(&path) else {
                    return (false, Vec::new());
                };
                let message = match self
                    .state
                    .session
                    .discard_check(&Transition::Close(path.clone()))
                {
                    DiscardCheck::Confirm { display_name } => {
                        format!("\"{display_name}\" has unsaved changes. Close it anyway?")
                    }
                    DiscardCheck::Proceed => {
                        format!("Are you sure you want to close \"{}\"?", doc.display_name)
                    }
                };
                (false, vec![Effect::ConfirmClose { path, message }])
            }
            Action::CloseConfirmed { path, confirmed } => {
                if !confirmed {
                    return (false, Vec::new());
                }
                (self.state.session.remove(&path).is_some(), Vec::new())
            }
            Action::CloseCurrent => (self.state.session.clear_current(), Vec::new()),
            Action::DiscardConfirmed { pending, confirmed } => {
                if !confirmed {
                    return (false, Vec::new());
                }
                self.resume(pending)
            }
            other => {
                tracing::error!(action = ?other, "non-session action passed to reduce_session_action");
                (false, Vec::new())
            }
        }
    }

    fn select_existing(&mut self, path: PathBuf) -> (bool, Vec<Effect>) {
        if !self.state.session.contains(&path) {
            return (false, Vec::new());
        }
        (false, vec![Effect::ReadFile(path)])
    }

    fn guard(&mut self, check: DiscardCheck, pending: PendingAction) -> (bool, Vec<Effect>) {
        match check {
            DiscardCheck::Proceed => self.resume(pending),
            DiscardCheck::Confirm { display_name } => (
                false,
                vec![Effect::ConfirmDiscard {
                    message: format!(
                        "\"{display_name}\" has unsaved changes that will be lost. Continue?"
                    ),
                    pending,
                }],
            ),
        }
    }

    fn resume(&mut self, pending: PendingAction) -> (bool, Vec<Effect>) {
        match pending {
            PendingAction::NewDocument => (self.state.session.new_document(), Vec::new()),
            PendingAction::SelectExisting(path) => self.select_existing(path),
        }
    }
}
