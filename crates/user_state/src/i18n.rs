//! Localizer capability and the swappable bundle stored in [`crate::UserState`].
//!
//! State is constructed with a not-ready bundle whose every call fails with
//! [`I18nError::NotSetUp`]. The host's localization setup later installs a real implementation,
//! usually a [`CatalogLocalizer`], through [`crate::UserStateStore::install_i18n`].

use std::{collections::BTreeMap, fmt, rc::Rc};

use thiserror::Error;

use crate::model::LocaleMessages;

/// Named values substituted into message templates.
pub type Substitutions = BTreeMap<String, String>;

/// Key prefix marking ICU-format messages when the catalog has no entry to inspect.
const ICU_KEY_PREFIX: &str = "icu:";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Localizer failures.
pub enum I18nError {
    /// A localizer call arrived before the host installed a real implementation.
    #[error("i18n not yet set up")]
    NotSetUp,
}

#[derive(Debug, Clone, PartialEq)]
/// Translator handle exposed by [`Localize::intl`]: the active locale and its catalog.
pub struct IntlHandle {
    pub locale: String,
    pub messages: Rc<LocaleMessages>,
}

/// The four-operation localization contract.
pub trait Localize {
    /// Renders `key` with `substitutions` applied.
    fn translate(&self, key: &str, substitutions: &Substitutions) -> Result<String, I18nError>;
    /// Returns the active locale tag.
    fn locale(&self) -> Result<String, I18nError>;
    /// Returns the underlying translator.
    fn intl(&self) -> Result<IntlHandle, I18nError>;
    /// Reports whether `key` uses the legacy `$name$` placeholder format.
    fn is_legacy_format(&self, key: &str) -> Result<bool, I18nError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Placeholder installed at construction; every call fails.
pub struct NotReadyLocalizer;

impl NotReadyLocalizer {
    fn fail(&self, operation: &'static str) -> I18nError {
        tracing::error!(operation, "i18n used before setup");
        I18nError::NotSetUp
    }
}

impl Localize for NotReadyLocalizer {
    fn translate(&self, _key: &str, _substitutions: &Substitutions) -> Result<String, I18nError> {
        Err(self.fail("translate"))
    }

    fn locale(&self) -> Result<String, I18nError> {
        Err(self.fail("locale"))
    }

    fn intl(&self) -> Result<IntlHandle, I18nError> {
        Err(self.fail("intl"))
    }

    fn is_legacy_format(&self, _key: &str) -> Result<bool, I18nError> {
        Err(self.fail("is_legacy_format"))
    }
}

#[derive(Debug, Clone)]
/// Localizer backed by an in-memory message catalog.
pub struct CatalogLocalizer {
    locale: String,
    messages: Rc<LocaleMessages>,
}

impl CatalogLocalizer {
    pub fn new(locale: impl Into<String>, messages: LocaleMessages) -> Self {
        Self {
            locale: locale.into(),
            messages: Rc::new(messages),
        }
    }
}

impl Localize for CatalogLocalizer {
    fn translate(&self, key: &str, substitutions: &Substitutions) -> Result<String, I18nError> {
        let Some(entry) = self.messages.get(key) else {
            tracing::warn!(key, locale = %self.locale, "missing translation");
            return Ok(key.to_string());
        };

        if let Some(template) = &entry.messageformat {
            return Ok(substitute(template, substitutions, '{', '}'));
        }
        if let Some(template) = &entry.message {
            return Ok(substitute(template, substitutions, '$', '$'));
        }

        tracing::warn!(key, locale = %self.locale, "translation entry has no template");
        Ok(key.to_string())
    }

    fn locale(&self) -> Result<String, I18nError> {
        Ok(self.locale.clone())
    }

    fn intl(&self) -> Result<IntlHandle, I18nError> {
        Ok(IntlHandle {
            locale: self.locale.clone(),
            messages: Rc::clone(&self.messages),
        })
    }

    fn is_legacy_format(&self, key: &str) -> Result<bool, I18nError> {
        Ok(match self.messages.get(key) {
            Some(entry) => entry.messageformat.is_none(),
            None => !key.starts_with(ICU_KEY_PREFIX),
        })
    }
}

/// Replaces `open name close` placeholders in one left-to-right pass.
///
/// Substituted values are emitted verbatim and never rescanned. Unknown names stay as written.
fn substitute(template: &str, substitutions: &Substitutions, open: char, close: char) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(open) {
        rendered.push_str(&rest[..start]);
        let after_open = &rest[start + open.len_utf8()..];
        let Some(end) = after_open.find(close) else {
            rendered.push_str(&rest[start..]);
            return rendered;
        };

        match substitutions.get(&after_open[..end]) {
            Some(value) => {
                rendered.push_str(value);
                rest = &after_open[end + close.len_utf8()..];
            }
            None => {
                rendered.push(open);
                rest = after_open;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

#[derive(Clone)]
/// Shared handle to the active [`Localize`] implementation.
///
/// Equality is identity: clones of one bundle compare equal, and every not-ready bundle equals
/// every other not-ready bundle.
pub struct I18n {
    inner: Rc<dyn Localize>,
    ready: bool,
}

impl I18n {
    pub fn not_ready() -> Self {
        Self {
            inner: Rc::new(NotReadyLocalizer),
            ready: false,
        }
    }

    pub fn new(localizer: impl Localize + 'static) -> Self {
        Self {
            inner: Rc::new(localizer),
            ready: true,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn t(&self, key: &str) -> Result<String, I18nError> {
        self.inner.translate(key, &Substitutions::new())
    }

    pub fn t_with(&self, key: &str, substitutions: &Substitutions) -> Result<String, I18nError> {
        self.inner.translate(key, substitutions)
    }

    pub fn locale(&self) -> Result<String, I18nError> {
        self.inner.locale()
    }

    pub fn intl(&self) -> Result<IntlHandle, I18nError> {
        self.inner.intl()
    }

    pub fn is_legacy_format(&self, key: &str) -> Result<bool, I18nError> {
        self.inner.is_legacy_format(key)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::not_ready()
    }
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        (!self.ready && !other.ready) || Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n").field("ready", &self.ready).finish()
    }
}
