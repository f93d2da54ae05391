//! Internationalization (i18n) module for the supported languages.
//!
//! # Architecture
//!
//! - `registry`: the supported languages, their codes and aliases
//! - `language`: `Language`, a language validated against a registry
//! - `strings`: translated string tables, one per language
//! - `validator`: coverage checks of translation tables
//!
//! # Example
//!
//! ```rust
//! use gofire_console::i18n::LocaleRegistry;
//!
//! let registry = LocaleRegistry::builtin().unwrap();
//! let chinese = registry.resolve("ZH-SG").unwrap();
//! assert_eq!(chinese.key, "zh-Hans");
//! assert!(registry.resolve("fr").is_none());
//! ```

mod language;
mod registry;
pub mod strings;
mod validator;

pub use language::Language;
pub use registry::{normalize, LanguageDescriptor, LocaleRegistry, RegistryError, DEFAULT_LANGUAGE};
pub use strings::Translations;
pub use validator::{TranslationValidator, ValidationReport};
