//! Service ports: traits + data contracts.

pub mod config;
pub mod host;
pub mod runner;
pub mod settings;

pub use config::{ConfigurationService, RemoteConfig, RemoteError};
pub use host::{
    display_name_for, FileHandle, FileResponse, HostApi, HostError, HostResult, ReadFileResponse,
    SaveRequest,
};
pub use runner::{ExecutionRequest, ExecutionResult, ExecutionRunner};
pub use settings::Settings;
