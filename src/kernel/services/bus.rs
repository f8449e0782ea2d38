use tokio::sync::mpsc::error::{SendError, TryRecvError};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::Command;
use crate::kernel::Action;

/// Work queued for the shell by host callbacks.
#[derive(Debug)]
pub enum KernelMessage {
    Command(Command),
    Action(Action),
}

#[derive(Debug, Clone)]
pub struct KernelBusSender {
    tx: UnboundedSender<KernelMessage>,
}

#[derive(Debug)]
pub struct KernelBusReceiver {
    rx: UnboundedReceiver<KernelMessage>,
}

pub fn kernel_bus() -> (KernelBusSender, KernelBusReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (KernelBusSender { tx }, KernelBusReceiver { rx })
}

impl KernelBusSender {
    pub fn send(&self, msg: KernelMessage) -> Result<(), SendError<KernelMessage>> {
        self.tx.send(msg)
    }

    pub fn send_command(&self, command: Command) -> Result<(), SendError<KernelMessage>> {
        self.send(KernelMessage::Command(command))
    }

    pub fn send_action(&self, action: Action) -> Result<(), SendError<KernelMessage>> {
        self.send(KernelMessage::Action(action))
    }
}

impl KernelBusReceiver {
    /// Waits for the next message; `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<KernelMessage> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Result<KernelMessage, TryRecvError> {
        self.rx.try_recv()
    }
}
