//! Locale registry: the supported languages and how identifiers map to them.
//!
//! The registry is built once by an explicit constructor and is immutable
//! afterwards. Lookups by locale code go through a normalized index, so
//! `zh-sg`, `ZH-SG` and `zh_SG` all find the same descriptor.

use crate::i18n::strings::{self, Translations};
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Key of the builtin default language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Description of one supported language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDescriptor {
    /// Stable internal key (e.g. "zh-Hans")
    pub key: &'static str,

    /// English name of the language (e.g. "Simplified Chinese")
    pub name: &'static str,

    /// Name in the language's own script (e.g. "简体中文")
    pub display_name: &'static str,

    /// Canonical locale code (e.g. "zh-CN")
    pub code: &'static str,

    /// Alternate locale codes resolving to this language
    pub aliases: &'static [&'static str],

    /// Translated strings, owned by `i18n::strings`
    #[serde(skip)]
    pub content: &'static Translations,
}

impl LanguageDescriptor {
    /// The canonical code followed by every alias.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.code).chain(self.aliases.iter().copied())
    }
}

/// Reasons a registry cannot be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("default language '{0}' is not registered")]
    MissingDefault(String),

    #[error("language key '{0}' is registered more than once")]
    DuplicateKey(String),

    #[error("locale code '{code}' is claimed by both '{first}' and '{second}'")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },

    #[error("locale code '{code}' of '{key}' is not a valid locale tag")]
    InvalidCode { key: String, code: String },
}

/// Immutable set of supported languages with a designated default.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    default_index: usize,
    languages: Vec<LanguageDescriptor>,
    /// Normalized code or alias -> index into `languages`
    by_code: HashMap<String, usize>,
}

static LOCALE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn is_locale_tag(code: &str) -> bool {
    LOCALE_TAG_REGEX
        .get_or_init(|| {
            Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("locale tag pattern")
        })
        .is_match(code)
}

/// Normalize an identifier for code lookup.
///
/// Surrounding whitespace is dropped, `_` is read as `-`, and case is folded.
pub fn normalize(identifier: &str) -> String {
    identifier.trim().replace('_', "-").to_ascii_lowercase()
}

impl LocaleRegistry {
    /// Build a registry, checking every invariant.
    ///
    /// # Arguments
    /// * `default_key` - Key of the default language; must be registered
    /// * `languages` - Descriptors in the order `list_languages` returns them
    ///
    /// # Returns
    /// * `Ok(LocaleRegistry)` if keys are unique, every code and alias is a
    ///   valid locale tag, and no code or alias belongs to two languages
    /// * `Err(RegistryError)` describing the first violation found
    pub fn new(
        default_key: &str,
        languages: Vec<LanguageDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut keys = HashSet::new();
        let mut by_code: HashMap<String, usize> = HashMap::new();

        for (index, language) in languages.iter().enumerate() {
            if !keys.insert(language.key) {
                return Err(RegistryError::DuplicateKey(language.key.to_string()));
            }

            for code in language.codes() {
                if !is_locale_tag(code) {
                    return Err(RegistryError::InvalidCode {
                        key: language.key.to_string(),
                        code: code.to_string(),
                    });
                }

                // A language may list its own code among its aliases.
                match by_code.get(&normalize(code)) {
                    Some(&owner) if owner != index => {
                        return Err(RegistryError::DuplicateCode {
                            code: code.to_string(),
                            first: languages[owner].key.to_string(),
                            second: language.key.to_string(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        by_code.insert(normalize(code), index);
                    }
                }
            }
        }

        let default_index = languages
            .iter()
            .position(|lang| lang.key == default_key)
            .ok_or_else(|| RegistryError::MissingDefault(default_key.to_string()))?;

        debug!(
            "Built locale registry with {} languages (default: {})",
            languages.len(),
            default_key
        );

        Ok(Self {
            default_index,
            languages,
            by_code,
        })
    }

    /// The registry of languages shipped with gofire.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(DEFAULT_LANGUAGE, builtin_languages())
    }

    /// Key of the default language.
    pub fn default_language(&self) -> &'static str {
        self.languages[self.default_index].key
    }

    /// Descriptor of the default language.
    pub fn default_descriptor(&self) -> &LanguageDescriptor {
        &self.languages[self.default_index]
    }

    /// Resolve a locale code or alias to its language.
    ///
    /// Matching is exact after normalization (see [`normalize`]). Internal keys
    /// are not matched here; use [`LocaleRegistry::get`] for those.
    ///
    /// # Returns
    /// * `Some(&LanguageDescriptor)` if a code or alias matches
    /// * `None` otherwise; falling back to the default is up to the caller
    pub fn resolve(&self, identifier: &str) -> Option<&LanguageDescriptor> {
        let normalized = normalize(identifier);
        if normalized.is_empty() {
            return None;
        }
        self.by_code
            .get(&normalized)
            .map(|&index| &self.languages[index])
    }

    /// Get a language by its internal key (exact match).
    pub fn get(&self, key: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|lang| lang.key == key)
    }

    /// All languages in registration order.
    pub fn list_languages(&self) -> Vec<&LanguageDescriptor> {
        self.languages.iter().collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.languages.iter().map(|lang| lang.key)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Builtin language descriptors, in display order.
fn builtin_languages() -> Vec<LanguageDescriptor> {
    vec![
        LanguageDescriptor {
            key: "en",
            name: "English",
            display_name: "English",
            code: "en",
            aliases: &[],
            content: &strings::ENGLISH,
        },
        LanguageDescriptor {
            key: "zh-Hans",
            name: "Simplified Chinese",
            display_name: "简体中文",
            code: "zh-CN",
            aliases: &["zh-CHS", "zh-CN", "zh-SG"],
            content: &strings::SIMPLIFIED_CHINESE,
        },
        LanguageDescriptor {
            key: "vi",
            name: "Vietnamese",
            display_name: "Tiếng Việt",
            code: "vi",
            aliases: &[],
            content: &strings::VIETNAMESE,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(
        key: &'static str,
        code: &'static str,
        aliases: &'static [&'static str],
    ) -> LanguageDescriptor {
        LanguageDescriptor {
            key,
            name: key,
            display_name: key,
            code,
            aliases,
            content: &strings::ENGLISH,
        }
    }

    fn builtin() -> LocaleRegistry {
        LocaleRegistry::builtin().expect("builtin registry should be valid")
    }

    // ==================== Builtin Tests ====================

    #[test]
    fn test_builtin_default_is_english() {
        let registry = builtin();
        assert_eq!(registry.default_language(), "en");
        assert_eq!(registry.default_descriptor().name, "English");
    }

    #[test]
    fn test_builtin_registration_order() {
        let registry = builtin();
        let keys: Vec<_> = registry.list_languages().iter().map(|l| l.key).collect();
        assert_eq!(keys, vec!["en", "zh-Hans", "vi"]);
        assert_eq!(registry.keys().collect::<Vec<_>>(), keys);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_builtin_descriptors() {
        let registry = builtin();
        let chinese = registry.get("zh-Hans").expect("zh-Hans registered");
        assert_eq!(chinese.name, "Simplified Chinese");
        assert_eq!(chinese.display_name, "简体中文");
        assert_eq!(chinese.code, "zh-CN");
        assert_eq!(chinese.aliases, &["zh-CHS", "zh-CN", "zh-SG"]);

        let vietnamese = registry.get("vi").expect("vi registered");
        assert_eq!(vietnamese.display_name, "Tiếng Việt");
        assert!(vietnamese.aliases.is_empty());
    }

    #[test]
    fn test_content_reference_is_kept() {
        let registry = builtin();
        let chinese = registry.get("zh-Hans").unwrap();
        assert_eq!(chinese.content.get("Settings"), Some("设置"));
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_alias_case_insensitive() {
        let registry = builtin();
        assert_eq!(registry.resolve("ZH-SG").map(|l| l.key), Some("zh-Hans"));
        assert_eq!(registry.resolve("zh-chs").map(|l| l.key), Some("zh-Hans"));
    }

    #[test]
    fn test_resolve_canonical_codes() {
        let registry = builtin();
        assert_eq!(registry.resolve("en").map(|l| l.key), Some("en"));
        assert_eq!(registry.resolve("zh-CN").map(|l| l.key), Some("zh-Hans"));
        assert_eq!(registry.resolve("VI").map(|l| l.key), Some("vi"));
    }

    #[test]
    fn test_resolve_normalizes_whitespace_and_underscore() {
        let registry = builtin();
        assert_eq!(registry.resolve("  zh_SG ").map(|l| l.key), Some("zh-Hans"));
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = builtin();
        assert!(registry.resolve("fr").is_none());
        assert!(registry.resolve("nonexistent-code").is_none());
        assert!(registry.resolve("").is_none());
        assert!(registry.resolve("   ").is_none());
    }

    #[test]
    fn test_resolve_does_not_match_prefix_or_key() {
        let registry = builtin();
        assert!(registry.resolve("zh").is_none());
        assert!(registry.resolve("en-US").is_none());
        // "zh-Hans" is a key, not a code or alias
        assert!(registry.resolve("zh-Hans").is_none());
    }

    #[test]
    fn test_get_is_exact() {
        let registry = builtin();
        assert!(registry.get("zh-Hans").is_some());
        assert!(registry.get("zh-hans").is_none());
        assert!(registry.get("zh-CN").is_none());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_missing_default_rejected() {
        let result = LocaleRegistry::new("fr", vec![descriptor("en", "en", &[])]);
        assert_eq!(
            result.unwrap_err(),
            RegistryError::MissingDefault("fr".to_string())
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = LocaleRegistry::new(
            "en",
            vec![descriptor("en", "en", &[]), descriptor("en", "en-GB", &[])],
        );
        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateKey("en".to_string())
        );
    }

    #[test]
    fn test_duplicate_code_across_languages_rejected() {
        let result = LocaleRegistry::new(
            "zh-Hans",
            vec![
                descriptor("zh-Hans", "zh-CN", &["zh-SG"]),
                descriptor("zh-Hant", "zh-TW", &["ZH-sg"]),
            ],
        );
        let err = result.unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateCode {
                code: "ZH-sg".to_string(),
                first: "zh-Hans".to_string(),
                second: "zh-Hant".to_string(),
            }
        );
        assert!(err.to_string().contains("zh-Hant"));
    }

    #[test]
    fn test_own_code_repeated_in_aliases_allowed() {
        let result =
            LocaleRegistry::new("zh-Hans", vec![descriptor("zh-Hans", "zh-CN", &["zh-CN"])]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_code_rejected() {
        let result = LocaleRegistry::new("en", vec![descriptor("en", "en us", &[])]);
        assert!(matches!(
            result.unwrap_err(),
            RegistryError::InvalidCode { .. }
        ));

        let result = LocaleRegistry::new("en", vec![descriptor("en", "en", &[""])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_locale_tag_pattern() {
        assert!(is_locale_tag("en"));
        assert!(is_locale_tag("zh-CHS"));
        assert!(is_locale_tag("zh-Hans-CN"));
        assert!(!is_locale_tag("e"));
        assert!(!is_locale_tag("en-"));
        assert!(!is_locale_tag("zh_CN"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" zh_SG "), "zh-sg");
        assert_eq!(normalize("EN"), "en");
    }

    #[test]
    fn test_descriptor_codes() {
        let d = descriptor("zh-Hans", "zh-CN", &["zh-CHS", "zh-SG"]);
        assert_eq!(d.codes().collect::<Vec<_>>(), vec!["zh-CN", "zh-CHS", "zh-SG"]);
    }

    #[test]
    fn test_descriptor_serializes_without_content() {
        let registry = builtin();
        let json = serde_json::to_value(registry.get("zh-Hans").unwrap()).unwrap();
        assert_eq!(json["displayName"], "简体中文");
        assert_eq!(json["aliases"][2], "zh-SG");
        assert!(json.get("content").is_none());
    }
}
