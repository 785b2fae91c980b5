//! Reducer actions and transition logic for the user state slice.

use platform_host::PlatformDetection;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    config::ConfigError,
    model::{InteractionMode, MenuOptions, ServiceId, ThemeType, UserState},
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Partial update for the mutable user fields.
///
/// `None` leaves the field untouched; `Some` overwrites it. The identity fields are nullable in
/// state, so they nest a second `Option`: on the wire an absent key is a no-op while `null`
/// clears the field. Paths, the localizer, locale messages, OS name, platform, and version are
/// construction-only and have no slot here.
pub struct UserChangedPayload {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub our_conversation_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub our_device_id: Option<Option<u32>>,
    #[serde(
        rename = "ourACI",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub our_aci: Option<Option<ServiceId>>,
    #[serde(
        rename = "ourPNI",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub our_pni: Option<Option<ServiceId>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub our_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub region_code: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_mode: Option<InteractionMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_main_window_maximized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_main_window_full_screen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_options: Option<MenuOptions>,
}

/// Marks a key that appeared on the wire, even when its value is `null`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl UserChangedPayload {
    /// Returns whether the payload carries no fields.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(&self, state: &mut UserState) {
        if let Some(id) = &self.our_conversation_id {
            state.our_conversation_id = id.clone();
        }
        if let Some(device_id) = self.our_device_id {
            state.our_device_id = device_id;
        }
        if let Some(aci) = &self.our_aci {
            state.our_aci = aci.clone();
        }
        if let Some(pni) = &self.our_pni {
            state.our_pni = pni.clone();
        }
        if let Some(number) = &self.our_number {
            state.our_number = number.clone();
        }
        if let Some(region_code) = &self.region_code {
            state.region_code = region_code.clone();
        }
        if let Some(mode) = self.interaction_mode {
            state.interaction_mode = mode;
        }
        if let Some(theme) = self.theme {
            state.theme = theme;
        }
        if let Some(maximized) = self.is_main_window_maximized {
            state.is_main_window_maximized = maximized;
        }
        if let Some(full_screen) = self.is_main_window_full_screen {
            state.is_main_window_full_screen = full_screen;
        }
        if let Some(menu_options) = &self.menu_options {
            state.menu_options = menu_options.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
/// Actions accepted by [`reduce_user`].
pub enum UserAction {
    /// Merge the payload's provided fields into state.
    #[serde(rename = "USER_CHANGED")]
    UserChanged(UserChangedPayload),
    /// Marker carrying no change; returned by requests whose effect happens elsewhere.
    #[serde(rename = "NOOP")]
    Noop,
}

impl UserAction {
    /// Stable action type tag, matching the wire format.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UserChanged(_) => "USER_CHANGED",
            Self::Noop => "NOOP",
        }
    }

    /// Decodes an action from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAction`] when `raw` is not a well-formed action object.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::InvalidAction)
    }
}

/// Applies a [`UserAction`] to `state` and returns the next state.
///
/// Pure and infallible: the input is never modified and payload values are taken as given.
pub fn reduce_user(state: &UserState, action: &UserAction) -> UserState {
    let mut next = state.clone();
    match action {
        UserAction::UserChanged(payload) => payload.apply(&mut next),
        UserAction::Noop => {}
    }
    next
}

/// Like [`reduce_user`], but starts from [`UserState::empty`] when no state exists yet.
pub fn reduce_user_or_empty(
    state: Option<&UserState>,
    action: &UserAction,
    platform: &dyn PlatformDetection,
) -> UserState {
    match state {
        Some(state) => reduce_user(state, action),
        None => reduce_user(&UserState::empty(platform), action),
    }
}
