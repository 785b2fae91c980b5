//! Host-supplied environment for the construction-only fields of [`UserState`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::{LocaleMessages, MenuOptions, UserState};

#[derive(Debug, Error)]
/// Errors raised while decoding host input: environment configuration and wire actions.
pub enum ConfigError {
    /// The input was not a valid environment record.
    #[error("invalid environment config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The input was not a valid user action.
    #[error("invalid user action: {0}")]
    InvalidAction(serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Environment the host knows at boot. Absent fields keep their current values.
pub struct EnvironmentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stickers_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_messages: Option<LocaleMessages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_options: Option<MenuOptions>,
}

impl EnvironmentConfig {
    /// Parses a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `raw` is not a JSON object of the expected shape.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses a config from an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `value` does not match the expected shape.
    pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    fn apply(self, state: &mut UserState) {
        if let Some(path) = self.attachments_path {
            state.attachments_path = path;
        }
        if let Some(path) = self.stickers_path {
            state.stickers_path = path;
        }
        if let Some(path) = self.temp_path {
            state.temp_path = path;
        }
        if let Some(platform) = self.platform {
            state.platform = platform;
        }
        if let Some(version) = self.version {
            state.version = version;
        }
        if let Some(messages) = self.locale_messages {
            state.locale_messages = messages;
        }
        if let Some(menu_options) = self.menu_options {
            state.menu_options = menu_options;
        }
    }
}

impl UserState {
    /// Returns this state with the provided environment fields filled in.
    pub fn with_environment(mut self, config: EnvironmentConfig) -> Self {
        config.apply(&mut self);
        self
    }
}
