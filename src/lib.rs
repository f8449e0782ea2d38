//! quill - editor shell library
//!
//! Modules:
//! - core: host commands and the event hub
//! - kernel: session/preferences/terminal state, reducers, service ports and adapters
//! - app: the async `Shell`, `CommandDispatcher` and the line front end

pub mod app;
pub mod core;
pub mod kernel;
