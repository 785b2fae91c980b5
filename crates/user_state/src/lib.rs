//! Current user and environment state for the desktop messaging client.
//!
//! [`UserState`] is built once by [`UserState::empty`], changed only through [`reduce_user`], and
//! owned by a [`UserStateStore`]. Host capabilities come from [`platform_host`].

pub mod actions;
pub mod config;
pub mod i18n;
pub mod model;
pub mod reducer;
pub mod store;

pub use config::{ConfigError, EnvironmentConfig};
pub use i18n::{
    CatalogLocalizer, I18n, I18nError, IntlHandle, Localize, NotReadyLocalizer, Substitutions,
};
pub use model::*;
pub use reducer::{reduce_user, reduce_user_or_empty, UserAction, UserChangedPayload};
pub use store::UserStateStore;
