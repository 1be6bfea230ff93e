//! Language type: validated language representation.
//!
//! A `Language` can only be built for a code that exists in the
//! [`LanguageRegistry`] and is enabled, so holders never have to re-check it.

use crate::i18n::{LanguageConfig, LanguageRegistry, TextDirection};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "ar", "en")
    code: &'static str,
}

impl Language {
    pub const ARABIC: Language = Language { code: "ar" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language used when no preference has been stored (Arabic).
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Text direction documents take in this language.
    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Name of the element attribute holding text in this language
    /// (e.g., `data-ar`).
    pub fn text_attribute(&self) -> String {
        format!("data-{}", self.code)
    }

    /// Name of the element attribute holding placeholder text in this
    /// language (e.g., `data-placeholder-ar`).
    pub fn placeholder_attribute(&self) -> String {
        format!("data-placeholder-{}", self.code)
    }

    /// All enabled languages, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
