//! Framework pieces shared by the kernel and the host adapters:
//! - Command: host-originated semantic commands
//! - EventHub: named event subscriptions with opaque handles

pub mod command;
pub mod event_hub;

pub use command::Command;
pub use event_hub::{EventHandler, EventHub, SubscriptionId};
