//! Typed host-capability contracts consumed by the client state layer.
//!
//! This crate is the API-first boundary for the services the state slices treat as black boxes:
//! operating-system detection and named-event dispatch. Native, no-op, and in-memory adapters
//! live alongside the traits so hosts and tests can compose a [`HostServices`] bundle without
//! pulling in a UI toolkit.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod events;
pub mod host;
pub mod platform;

pub use events::{EventDispatch, MemoryEventDispatch, NoopEventDispatch, MANUAL_CONNECT_EVENT};
pub use host::{HostServices, HostStrategy};
pub use platform::{NativePlatform, PlatformDetection, StaticPlatform};
