//! Application layer: the async shell, host command routing and the line front end.

pub mod dispatcher;
pub mod error;
pub mod repl;
pub mod shell;

pub use dispatcher::CommandDispatcher;
pub use error::{RunError, SaveError};
pub use shell::Shell;
