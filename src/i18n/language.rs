//! Language type: a language validated against a registry.
//!
//! The registry never falls back to the default language; callers combine
//! `from_identifier` and `default_for` to pick their own policy.

use crate::i18n::{LanguageDescriptor, LocaleRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A language known to a specific registry.
#[derive(Clone, Copy)]
pub struct Language<'r> {
    registry: &'r LocaleRegistry,
    descriptor: &'r LanguageDescriptor,
}

impl<'r> Language<'r> {
    /// Create a Language from an internal key or a locale code/alias.
    ///
    /// Keys are tried first (exact match), then codes and aliases through
    /// [`LocaleRegistry::resolve`].
    ///
    /// # Returns
    /// * `Ok(Language)` if the identifier names a registered language
    /// * `Err` if nothing matches
    ///
    /// # Example
    /// ```ignore
    /// let chinese = Language::from_identifier(&registry, "zh-SG")?;
    /// ```
    pub fn from_identifier(registry: &'r LocaleRegistry, identifier: &str) -> Result<Self> {
        let descriptor = registry
            .get(identifier.trim())
            .or_else(|| registry.resolve(identifier));

        match descriptor {
            Some(descriptor) => Ok(Language {
                registry,
                descriptor,
            }),
            None => bail!("Unknown language: '{}'", identifier),
        }
    }

    /// The registry's default language.
    pub fn default_for(registry: &'r LocaleRegistry) -> Self {
        Language {
            registry,
            descriptor: registry.default_descriptor(),
        }
    }

    pub fn key(&self) -> &'static str {
        self.descriptor.key
    }

    pub fn code(&self) -> &'static str {
        self.descriptor.code
    }

    /// English name of the language (e.g. "Vietnamese").
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Name in the language's own script (e.g. "Tiếng Việt").
    pub fn display_name(&self) -> &'static str {
        self.descriptor.display_name
    }

    pub fn descriptor(&self) -> &'r LanguageDescriptor {
        self.descriptor
    }

    pub fn is_default(&self) -> bool {
        self.descriptor.key == self.registry.default_language()
    }

    /// Translated string for `key`, if this language's table has it.
    pub fn text(&self, key: &str) -> Option<&'static str> {
        self.descriptor.content.get(key)
    }
}

impl PartialEq for Language<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.key == other.descriptor.key
    }
}

impl Eq for Language<'_> {}

impl fmt::Debug for Language<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("key", &self.descriptor.key)
            .field("code", &self.descriptor.code)
            .finish()
    }
}

impl fmt::Display for Language<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.descriptor.display_name, self.descriptor.code)
    }
}
