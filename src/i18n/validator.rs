//! Markup validation for localized pages.
//!
//! The switcher silently skips elements it cannot render in every language.
//! This module reports those elements (and broken language selectors) ahead
//! of time so they can be fixed in the markup.

use crate::i18n::{iso639, Language, LanguageRegistry};
use crate::page::{Element, LocalizedElement, Page, SelectorControl};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that break language switching (e.g., a selector that cannot
    /// activate any language)
    pub errors: Vec<String>,

    /// Elements the switcher will skip or render partially
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

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

/// Validator for the localized markup contract.
pub struct MarkupValidator;

// Matches data-<code> and data-placeholder-<code> attribute names
static VARIANT_ATTRIBUTE_REGEX: OnceLock<Regex> = OnceLock::new();

impl MarkupValidator {
    /// Validate every element and selector control of `page`.
    pub fn validate(page: &Page) -> ValidationReport {
        let mut report = ValidationReport::new();
        let languages = Language::all();

        for (index, element) in page.elements.iter().enumerate() {
            let label = Self::label(element, index);

            if element.is_selector() {
                Self::check_selector(element, &label, &mut report);
            }

            if element.declares_localized_text() {
                Self::check_text_variants(element, &label, &languages, &mut report);
                Self::check_placeholder_variants(element, &label, &languages, &mut report);
            }

            Self::check_unregistered_variants(element, &label, &mut report);
        }

        for language in &languages {
            let has_selector = page
                .selectors()
                .any(|e| e.language_tag() == Some(language.code()));
            if !has_selector {
                report.errors.push(format!(
                    "No language selector for {} ({})",
                    language.name(),
                    language.code()
                ));
            }
        }

        report
    }

    fn check_selector(element: &Element, label: &str, report: &mut ValidationReport) {
        match element.language_tag() {
            None => report
                .errors
                .push(format!("Language selector {} has no data-lang", label)),
            Some(tag) if !LanguageRegistry::get().is_enabled(tag) => report.errors.push(format!(
                "Language selector {} targets unsupported language '{}'",
                label, tag
            )),
            Some(_) => {}
        }
    }

    fn check_text_variants(
        element: &Element,
        label: &str,
        languages: &[Language],
        report: &mut ValidationReport,
    ) {
        let missing: Vec<_> = languages
            .iter()
            .filter(|lang| element.localized_text(**lang).is_none())
            .map(|lang| lang.code())
            .collect();

        if !missing.is_empty() {
            report.warnings.push(format!(
                "Element {} is missing text for {:?} and will not be switched",
                label, missing
            ));
        }

        for lang in languages {
            if let Some(text) = element.localized_text(*lang) {
                if text.trim().is_empty() {
                    report
                        .warnings
                        .push(format!("Element {} has empty {} text", label, lang.code()));
                }
            }
        }
    }

    fn check_placeholder_variants(
        element: &Element,
        label: &str,
        languages: &[Language],
        report: &mut ValidationReport,
    ) {
        let present: Vec<_> = languages
            .iter()
            .filter(|lang| element.localized_placeholder(**lang).is_some())
            .collect();

        if present.is_empty() {
            return;
        }

        if !element.is_input_like() {
            report.warnings.push(format!(
                "Element {} is not an input; its placeholder variants are ignored",
                label
            ));
        } else if present.len() != languages.len() {
            let missing: Vec<_> = languages
                .iter()
                .filter(|lang| element.localized_placeholder(**lang).is_none())
                .map(|lang| lang.code())
                .collect();
            report.warnings.push(format!(
                "Input {} is missing placeholder for {:?}",
                label, missing
            ));
        }
    }

    fn check_unregistered_variants(element: &Element, label: &str, report: &mut ValidationReport) {
        if !element.declares_localized_text() {
            return;
        }

        let regex = VARIANT_ATTRIBUTE_REGEX
            .get_or_init(|| Regex::new(r"^data-(placeholder-)?([a-z]{2})$").unwrap());
        let registry = LanguageRegistry::get();

        for name in element.attributes.keys() {
            let Some(cap) = regex.captures(name) else {
                continue;
            };
            let is_placeholder = cap.get(1).is_some();
            let code = &cap[2];

            // Bare data-xx names are only variants when xx reads as a language
            if registry.get_by_code(code).is_none()
                && (is_placeholder || iso639::is_language_variant_code(code))
            {
                report.warnings.push(format!(
                    "Element {} has attribute {} for unsupported language '{}'",
                    label, name, code
                ));
            }
        }
    }

    /// Human-readable element reference: `#id` when present, else tag and
    /// position.
    fn label(element: &Element, index: usize) -> String {
        match &element.id {
            Some(id) => format!("#{}", id),
            None => format!("<{}>[{}]", element.tag, index),
        }
    }
}
