//! Language registry: Single source of truth for all supported languages.
//!
//! The portfolio ships in Arabic and English. Arabic is the default and is
//! laid out right-to-left; English is laid out left-to-right. The registry is
//! initialized once with `OnceLock` and is immutable afterwards.

use crate::i18n::TextDirection;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "ar", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Arabic", "English")
    pub name: &'static str,

    /// Native name of the language (e.g., "العربية", "English")
    pub native_name: &'static str,

    /// Layout flow for documents rendered in this language
    pub direction: TextDirection,

    /// Whether this language is used when no preference has been stored
    /// (exactly one should be true)
    pub is_default: bool,

    /// Whether this language can be selected
    pub enabled: bool,
}

/// Global language registry.
///
/// Read-only after first access. Holds no user state; the selected language
/// lives in a [`PreferenceStore`](crate::store::PreferenceStore).
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the registry defines zero or several default languages,
    /// which is a configuration error in `default_languages`.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            direction: TextDirection::Rtl,
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            direction: TextDirection::Ltr,
            is_default: false,
            enabled: true,
        },
    ]
}
