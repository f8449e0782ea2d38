//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the kernel and shell depend on (host, configuration, runner, settings).
//! - `adapters`: IO implementations of those contracts (HTTP, terminal prompts, files).

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
