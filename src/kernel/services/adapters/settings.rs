use std::path::{Path, PathBuf};

use super::paths::get_cache_dir;
use crate::kernel::services::ports::settings::Settings;

const SETTINGS_FILE: &str = "settings.json";

pub const CONFIG_URL_ENV: &str = "QUILL_CONFIG_URL";
pub const RUN_URL_ENV: &str = "QUILL_RUN_URL";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot determine settings directory")]
    NoSettingsDir,
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> Result<PathBuf, SettingsError> {
    let path = get_settings_path().ok_or(SettingsError::NoSettingsDir)?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

/// Writes default settings to `path` unless a file is already there.
pub fn ensure_settings_file_at(path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default())?;
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings() -> Result<Settings, SettingsError> {
    let path = get_settings_path().ok_or(SettingsError::NoSettingsDir)?;
    load_settings_from(&path)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Endpoint overrides; a set-but-empty variable disables the service.
pub fn apply_env_overrides(
    mut settings: Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Settings {
    if let Some(url) = lookup(CONFIG_URL_ENV) {
        settings.configuration_endpoint = url.trim().to_string();
    }
    if let Some(url) = lookup(RUN_URL_ENV) {
        settings.execution_endpoint = url.trim().to_string();
    }
    settings
}

/// Settings for this process: the file (created on first run) plus environment overrides.
/// Problems with the file fall back to defaults.
pub fn resolve_settings() -> Settings {
    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "could not create settings file");
    }
    let settings = load_settings().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default settings");
        Settings::default()
    });
    apply_env_overrides(settings, |key| std::env::var(key).ok())
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
