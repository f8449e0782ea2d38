use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;

use crate::kernel::preferences::{Preferences, Theme, DEFAULT_FONT_SIZE};

pub const DEFAULT_CONFIGURATION_ENDPOINT: &str = "http://127.0.0.1:5000/configuration";
pub const DEFAULT_EXECUTION_ENDPOINT: &str = "http://127.0.0.1:5000/execute";

/// Local settings file contents. An empty endpoint disables that remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_configuration_endpoint")]
    pub configuration_endpoint: String,
    #[serde(default = "default_execution_endpoint")]
    pub execution_endpoint: String,
    #[serde(default = "default_font_size")]
    pub font_size: NonZeroU16,
    #[serde(default)]
    pub theme: Theme,
}

fn default_configuration_endpoint() -> String {
    DEFAULT_CONFIGURATION_ENDPOINT.to_string()
}

fn default_execution_endpoint() -> String {
    DEFAULT_EXECUTION_ENDPOINT.to_string()
}

fn default_font_size() -> NonZeroU16 {
    DEFAULT_FONT_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            configuration_endpoint: default_configuration_endpoint(),
            execution_endpoint: default_execution_endpoint(),
            font_size: default_font_size(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Local defaults used until the configuration service answers.
    pub fn initial_preferences(&self) -> Preferences {
        Preferences {
            font_size: self.font_size,
            theme: self.theme,
            ..Preferences::default()
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
