//! Translation coverage validation.
//!
//! Compares each language's translation table against the default
//! language's table, which is the reference set of message keys.

use crate::i18n::LocaleRegistry;
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about translation tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys the default language has but a translation lacks
    pub errors: Vec<String>,

    /// Extra keys and empty values
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation table coverage.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Check every language's table against the default language's table.
    ///
    /// This function reports:
    /// - keys missing from a translation (error)
    /// - keys a translation has that the default lacks (warning)
    /// - empty values, in any table (warning)
    pub fn validate(registry: &LocaleRegistry) -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = registry.default_descriptor();
        let reference_keys: BTreeSet<_> = reference.content.keys().collect();

        for language in registry.list_languages() {
            for (key, value) in language.content.entries() {
                if value.trim().is_empty() {
                    report
                        .warnings
                        .push(format!("'{}' has an empty value for '{}'", language.key, key));
                }
            }

            if language.key == reference.key {
                continue;
            }

            let keys: BTreeSet<_> = language.content.keys().collect();

            for missing in reference_keys.difference(&keys) {
                report
                    .errors
                    .push(format!("'{}' is missing '{}'", language.key, missing));
            }

            for extra in keys.difference(&reference_keys) {
                report.warnings.push(format!(
                    "'{}' has '{}' which '{}' does not define",
                    language.key, extra, reference.key
                ));
            }
        }

        report
    }
}
