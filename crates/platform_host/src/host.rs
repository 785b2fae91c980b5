//! Shared host-bundle models for composing the client state layer.

use std::rc::Rc;

use crate::{
    EventDispatch, NativePlatform, NoopEventDispatch, PlatformDetection, StaticPlatform,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Native desktop composition.
    Native,
    /// Composition with placeholder/no-op adapters.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the state layer.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `user_state`, which keeps the reducers decoupled from adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Operating-system detection, consulted once when state is constructed.
    pub platform: Rc<dyn PlatformDetection>,
    /// Named-event dispatch for requests that leave the state layer.
    pub events: Rc<dyn EventDispatch>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Native bundle: compile-target platform detection and no event listeners.
    ///
    /// Hosts with a real event bus replace [`HostServices::events`] before use.
    pub fn native() -> Self {
        Self {
            platform: Rc::new(NativePlatform),
            events: Rc::new(NoopEventDispatch),
            host_strategy: HostStrategy::Native,
        }
    }

    /// Stub bundle with fixed platform answers and the supplied event sink.
    pub fn stub(platform: StaticPlatform, events: Rc<dyn EventDispatch>) -> Self {
        Self {
            platform: Rc::new(platform),
            events,
            host_strategy: HostStrategy::Stub,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryEventDispatch;

    #[test]
    fn stub_bundle_forwards_events_to_the_supplied_sink() {
        let events = MemoryEventDispatch::default();
        let host = HostServices::stub(StaticPlatform::linux(), Rc::new(events.clone()));

        host.events.trigger("ping");

        assert_eq!(host.host_strategy, HostStrategy::Stub);
        assert!(host.platform.is_linux());
        assert_eq!(events.count("ping"), 1);
    }

    #[test]
    fn strategy_tokens_are_stable() {
        assert_eq!(HostStrategy::Native.as_str(), "native");
        assert_eq!(HostStrategy::Stub.as_str(), "stub");
        assert_eq!(HostServices::native().host_strategy, HostStrategy::Native);
    }
}
