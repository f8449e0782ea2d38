//! Routes native menu events onto the kernel bus.

use std::sync::Arc;

use crate::core::{Command, SubscriptionId};
use crate::kernel::services::ports::HostApi;
use crate::kernel::services::KernelBusSender;

/// Holds one host subscription per command event while attached.
pub struct CommandDispatcher {
    host: Arc<dyn HostApi>,
    bus: KernelBusSender,
    subscriptions: Vec<SubscriptionId>,
}

impl CommandDispatcher {
    pub fn new(host: Arc<dyn HostApi>, bus: KernelBusSender) -> Self {
        Self {
            host,
            bus,
            subscriptions: Vec::new(),
        }
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Subscribes to every command event. A second call is a no-op and returns false.
    pub fn attach(&mut self) -> bool {
        if self.is_attached() {
            return false;
        }
        for command in Command::ALL {
            let bus = self.bus.clone();
            let id = self.host.subscribe(
                command.event_name(),
                Arc::new(move || {
                    if bus.send_command(command).is_err() {
                        tracing::debug!(command = command.name(), "bus closed, dropping command");
                    }
                }),
            );
            self.subscriptions.push(id);
        }
        tracing::debug!(count = self.subscriptions.len(), "command dispatcher attached");
        true
    }

    /// Releases every subscription this dispatcher holds. Returns how many were live.
    pub fn detach(&mut self) -> usize {
        self.subscriptions
            .drain(..)
            .filter(|id| self.host.unsubscribe(*id))
            .count()
    }
}

impl Drop for CommandDispatcher {
    fn drop(&mut self) {
        self.detach();
    }
}
