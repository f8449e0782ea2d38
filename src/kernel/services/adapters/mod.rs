//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod config;
mod http;
pub mod paths;
pub mod prompt_host;
pub mod runner;
pub mod runtime;
pub mod settings;

pub use config::{HttpConfigurationService, MemoryConfigurationService};
pub use paths::{ensure_log_dir, get_cache_dir, get_log_dir};
pub use prompt_host::{Printer, PromptHost};
pub use runner::{HttpExecutionRunner, UnconfiguredRunner};
pub use runtime::AsyncRuntime;
pub use settings::{
    apply_env_overrides, ensure_settings_file, get_settings_path, load_settings,
    load_settings_from, resolve_settings, SettingsError,
};
