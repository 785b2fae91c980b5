//! Named-event dispatch contracts and adapters.

use std::{cell::RefCell, rc::Rc};

/// Event name the network layer listens on for a user-requested reconnect.
pub const MANUAL_CONNECT_EVENT: &str = "manualConnect";

/// Host service that fires named, payload-free events at external listeners.
///
/// Dispatch is fire-and-forget; no acknowledgement is reported back.
pub trait EventDispatch {
    /// Fires `event` once.
    fn trigger(&self, event: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op event dispatch for hosts without listeners.
pub struct NoopEventDispatch;

impl EventDispatch for NoopEventDispatch {
    fn trigger(&self, event: &str) {
        tracing::trace!(event, "dropping event on no-op dispatch");
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory event dispatch that records every triggered name in order.
///
/// Clones share the same log.
pub struct MemoryEventDispatch {
    inner: Rc<RefCell<Vec<String>>>,
}

impl MemoryEventDispatch {
    /// Returns the triggered event names in dispatch order.
    pub fn triggered(&self) -> Vec<String> {
        self.inner.borrow().clone()
    }

    /// Counts how many times `event` was triggered.
    pub fn count(&self, event: &str) -> usize {
        self.inner.borrow().iter().filter(|e| *e == event).count()
    }

    /// Clears the recorded log.
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}

impl EventDispatch for MemoryEventDispatch {
    fn trigger(&self, event: &str) {
        self.inner.borrow_mut().push(event.to_string());
    }
}
