//! Action creators for the user state slice.

use platform_host::{EventDispatch, MANUAL_CONNECT_EVENT};

use crate::reducer::{UserAction, UserChangedPayload};

pub fn user_changed(payload: UserChangedPayload) -> UserAction {
    UserAction::UserChanged(payload)
}

/// Asks the network layer to reconnect now.
///
/// The request goes out as a [`MANUAL_CONNECT_EVENT`] on `events`; the returned action is a
/// [`UserAction::Noop`] so dispatching it leaves state untouched.
pub fn manual_reconnect(events: &dyn EventDispatch) -> UserAction {
    tracing::info!(event = MANUAL_CONNECT_EVENT, "requesting manual reconnect");
    events.trigger(MANUAL_CONNECT_EVENT);
    UserAction::Noop
}
