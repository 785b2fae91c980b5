//! Explicit owner of the user state slice.
//!
//! Replaces an ambient global store: the application context holds one [`UserStateStore`] and
//! routes every change through [`UserStateStore::dispatch`], which swaps in the reducer's
//! result.

use platform_host::HostServices;

use crate::{
    actions,
    config::EnvironmentConfig,
    i18n::I18n,
    model::UserState,
    reducer::{reduce_user, UserAction, UserChangedPayload},
};

/// Long-lived container for [`UserState`] and the host services it was built from.
#[derive(Debug)]
pub struct UserStateStore {
    host: HostServices,
    state: UserState,
}

impl UserStateStore {
    /// Creates the store with an empty state, detecting the OS from `host`.
    pub fn new(host: HostServices) -> Self {
        let state = UserState::empty(host.platform.as_ref());
        tracing::debug!(
            host = host.host_strategy.as_str(),
            os = state.os_name.map(|os| os.as_str()),
            "user state initialized"
        );
        Self { host, state }
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    pub fn host(&self) -> &HostServices {
        &self.host
    }

    pub fn into_state(self) -> UserState {
        self.state
    }

    /// Reduces `action` into the held state.
    pub fn dispatch(&mut self, action: UserAction) {
        let next = reduce_user(&self.state, &action);
        tracing::debug!(
            action = action.kind(),
            changed = next != self.state,
            "user action dispatched"
        );
        self.state = next;
    }

    pub fn user_changed(&mut self, payload: UserChangedPayload) {
        self.dispatch(actions::user_changed(payload));
    }

    /// Fires the reconnect request through the host and dispatches the resulting no-op.
    pub fn manual_reconnect(&mut self) -> UserAction {
        let action = actions::manual_reconnect(self.host.events.as_ref());
        self.dispatch(action.clone());
        action
    }

    /// Swaps in the real localizer once the host's localization setup completes.
    pub fn install_i18n(&mut self, i18n: I18n) {
        tracing::debug!(ready = i18n.is_ready(), "installing i18n");
        let mut next = self.state.clone();
        next.i18n = i18n;
        self.state = next;
    }

    /// Fills construction-only fields from host configuration.
    pub fn apply_environment(&mut self, config: EnvironmentConfig) {
        self.state = self.state.clone().with_environment(config);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::{MemoryEventDispatch, StaticPlatform, MANUAL_CONNECT_EVENT};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{OsName, ThemeType};

    fn store() -> (UserStateStore, MemoryEventDispatch) {
        let events = MemoryEventDispatch::default();
        let host = HostServices::stub(StaticPlatform::windows(), Rc::new(events.clone()));
        (UserStateStore::new(host), events)
    }

    #[test]
    fn new_store_holds_empty_state_for_host_platform() {
        let (store, _) = store();
        assert_eq!(store.state().os_name, Some(OsName::Windows));
        assert_eq!(store.state(), &UserState::empty(&StaticPlatform::windows()));
    }

    #[test]
    fn dispatches_apply_in_order() {
        let (mut store, _) = store();

        store.user_changed(UserChangedPayload {
            theme: Some(ThemeType::Dark),
            region_code: Some(Some("US".to_string())),
            ..UserChangedPayload::default()
        });
        store.user_changed(UserChangedPayload {
            theme: Some(ThemeType::Light),
            ..UserChangedPayload::default()
        });

        assert_eq!(store.state().theme, ThemeType::Light);
        assert_eq!(store.state().region_code.as_deref(), Some("US"));
    }

    #[test]
    fn manual_reconnect_fires_event_without_touching_state() {
        let (mut store, events) = store();
        let before = store.state().clone();

        let action = store.manual_reconnect();

        assert_eq!(action, UserAction::Noop);
        assert_eq!(events.count(MANUAL_CONNECT_EVENT), 1);
        assert_eq!(store.state(), &before);
    }
}
