use std::collections::BTreeMap;

use platform_host::PlatformDetection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::I18n;

/// Placeholder stored in string fields the host has not filled in yet.
pub const MISSING: &str = "missing";
pub const DEFAULT_VERSION: &str = "0.0.0";
pub const UNKNOWN_MENU_PLATFORM: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    #[default]
    Mouse,
    Keyboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsName {
    Linux,
    Macos,
    Windows,
}

impl OsName {
    /// Checks Windows, then macOS, then Linux; the first match wins.
    pub fn detect(platform: &dyn PlatformDetection) -> Option<Self> {
        if platform.is_windows() {
            Some(Self::Windows)
        } else if platform.is_macos() {
            Some(Self::Macos)
        } else if platform.is_linux() {
            Some(Self::Linux)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Macos => "macos",
            Self::Windows => "windows",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOptions {
    pub development: bool,
    pub dev_tools: bool,
    pub include_setup: bool,
    pub is_production: bool,
    pub platform: String,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            development: false,
            dev_tools: false,
            include_setup: false,
            is_production: true,
            platform: UNKNOWN_MENU_PLATFORM.to_string(),
        }
    }
}

/// One catalog entry. ICU entries carry `messageformat`; legacy entries only `message`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocaleMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messageformat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LocaleMessage {
    pub fn legacy(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn icu(messageformat: impl Into<String>) -> Self {
        Self {
            messageformat: Some(messageformat.into()),
            ..Self::default()
        }
    }
}

pub type LocaleMessages = BTreeMap<String, LocaleMessage>;

/// Account service identifier (ACI or PNI) as the host reported it.
///
/// Stored verbatim; [`ServiceId::uuid`] parses on demand so a malformed value never blocks an
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub String);

impl ServiceId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier as a UUID, or `None` when it is not one.
    pub fn uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.0).ok()
    }
}

impl From<Uuid> for ServiceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }
}

/// Process-wide record describing the signed-in user and the running environment.
#[derive(Debug, Clone, PartialEq)]
pub struct UserState {
    pub attachments_path: String,
    pub i18n: I18n,
    pub interaction_mode: InteractionMode,
    pub is_main_window_full_screen: bool,
    pub is_main_window_maximized: bool,
    pub locale_messages: LocaleMessages,
    pub menu_options: MenuOptions,
    pub os_name: Option<OsName>,
    pub our_aci: Option<ServiceId>,
    pub our_conversation_id: Option<String>,
    pub our_device_id: Option<u32>,
    pub our_number: Option<String>,
    pub our_pni: Option<ServiceId>,
    pub platform: String,
    pub region_code: Option<String>,
    pub stickers_path: String,
    pub temp_path: String,
    pub theme: ThemeType,
    pub version: String,
}

impl UserState {
    /// Builds the boot state: placeholders everywhere, a not-ready localizer, and the detected OS.
    pub fn empty(platform: &dyn PlatformDetection) -> Self {
        Self {
            attachments_path: MISSING.to_string(),
            i18n: I18n::not_ready(),
            interaction_mode: InteractionMode::Mouse,
            is_main_window_full_screen: false,
            is_main_window_maximized: false,
            locale_messages: LocaleMessages::new(),
            menu_options: MenuOptions::default(),
            os_name: OsName::detect(platform),
            our_aci: None,
            our_conversation_id: Some(MISSING.to_string()),
            our_device_id: Some(0),
            our_number: Some(MISSING.to_string()),
            our_pni: None,
            platform: MISSING.to_string(),
            region_code: Some(MISSING.to_string()),
            stickers_path: MISSING.to_string(),
            temp_path: MISSING.to_string(),
            theme: ThemeType::Light,
            version: DEFAULT_VERSION.to_string(),
        }
    }
}
