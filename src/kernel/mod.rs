//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod preferences;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
pub mod terminal;

pub use action::Action;
pub use effect::Effect;
pub use preferences::{InterpreterSlot, Preferences, Theme};
pub use session::{
    CurrentDocument, DiscardCheck, Document, DocumentStatus, SessionState, Transition,
    UNTITLED_NAME,
};
pub use state::{AppState, PendingAction, UiState};
pub use store::{DispatchResult, Store};
pub use terminal::{RunKey, TerminalOutput, TerminalOutputModel};
