//! Rendering surface for the language switcher.
//!
//! The switcher only talks to the [`RenderSurface`] trait: it sets the
//! document language and direction, marks selector controls, and visits
//! localized elements. [`Page`] is the concrete surface, a flat model of the
//! portfolio markup that can be loaded from and written back to JSON.
//!
//! Markup contract:
//! - localized text lives in `data-<code>` attributes (`data-en`, `data-ar`);
//! - input-like elements may also carry `data-placeholder-<code>`;
//! - selector controls have class `lang-btn` and `data-lang="<code>"`, and
//!   the one matching the active language carries class `active`.

use crate::i18n::{Language, TextDirection};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Class marking a language selector control.
pub const SELECTOR_CLASS: &str = "lang-btn";

/// Attribute on a selector control naming the language it activates.
pub const SELECTOR_ATTRIBUTE: &str = "data-lang";

/// Class carried by the selector control of the active language.
pub const ACTIVE_CLASS: &str = "active";

/// An element whose text can be switched between languages.
pub trait LocalizedElement {
    /// Text variant for `language`, if the element declares one.
    fn localized_text(&self, language: Language) -> Option<&str>;

    /// Placeholder variant for `language`, if the element declares one.
    fn localized_placeholder(&self, language: Language) -> Option<&str>;

    /// Text inputs receive a placeholder instead of text content.
    fn is_input_like(&self) -> bool;

    fn set_text(&mut self, text: &str);

    fn set_placeholder(&mut self, placeholder: &str);
}

/// A control the user activates to pick a language.
pub trait SelectorControl {
    /// Language tag the control activates, `None` if it declares none.
    fn language_tag(&self) -> Option<&str>;

    fn set_active(&mut self, active: bool);
}

/// Anything the switcher can render into.
pub trait RenderSurface {
    fn set_document_language(&mut self, language: Language, direction: TextDirection);

    fn for_each_selector(&mut self, f: &mut dyn FnMut(&mut dyn SelectorControl));

    /// Visit every element declaring at least one localized text variant.
    /// Elements with an incomplete set are visited too; filtering them out
    /// is the switcher's job.
    fn for_each_localized_element(&mut self, f: &mut dyn FnMut(&mut dyn LocalizedElement));
}

// ==================== Element ====================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    /// Tag name (e.g., "a", "h1", "input")
    pub tag: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Visible text content
    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class: String = class.into();
        self.add_class(&class);
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Element with `data-en` / `data-ar` text variants.
    pub fn localized(tag: impl Into<String>, english: &str, arabic: &str) -> Self {
        Self::new(tag)
            .with_attr(Language::ENGLISH.text_attribute(), english)
            .with_attr(Language::ARABIC.text_attribute(), arabic)
    }

    /// Selector control activating `code`.
    pub fn selector(code: &str) -> Self {
        Self::new("button")
            .with_class(SELECTOR_CLASS)
            .with_attr(SELECTOR_ATTRIBUTE, code)
            .with_text(code.to_uppercase())
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn is_selector(&self) -> bool {
        self.has_class(SELECTOR_CLASS)
    }

    /// Whether any enabled language has a text variant on this element.
    pub fn declares_localized_text(&self) -> bool {
        Language::all()
            .iter()
            .any(|lang| self.attributes.contains_key(&lang.text_attribute()))
    }
}

impl LocalizedElement for Element {
    fn localized_text(&self, language: Language) -> Option<&str> {
        self.attr(&language.text_attribute())
    }

    fn localized_placeholder(&self, language: Language) -> Option<&str> {
        self.attr(&language.placeholder_attribute())
    }

    fn is_input_like(&self) -> bool {
        self.tag.eq_ignore_ascii_case("input") || self.tag.eq_ignore_ascii_case("textarea")
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = Some(placeholder.to_string());
    }
}

impl SelectorControl for Element {
    fn language_tag(&self) -> Option<&str> {
        self.attr(SELECTOR_ATTRIBUTE)
    }

    fn set_active(&mut self, active: bool) {
        if active {
            self.add_class(ACTIVE_CLASS);
        } else {
            self.remove_class(ACTIVE_CLASS);
        }
    }
}

// ==================== Page ====================

/// The portfolio document: root `lang`/`dir` attributes plus its elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub lang: String,

    #[serde(default)]
    pub dir: TextDirection,

    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Page {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse page JSON")
    }

    /// Load a page from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page file {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid page file {}", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize page")
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    pub fn selectors(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.is_selector())
    }

    /// Language tag of the selector currently marked active, if exactly one is.
    pub fn active_selector_tag(&self) -> Option<&str> {
        let mut active = self.selectors().filter(|e| e.has_class(ACTIVE_CLASS));
        match (active.next(), active.next()) {
            (Some(only), None) => only.language_tag(),
            _ => None,
        }
    }
}

impl RenderSurface for Page {
    fn set_document_language(&mut self, language: Language, direction: TextDirection) {
        self.lang = language.code().to_string();
        self.dir = direction;
    }

    fn for_each_selector(&mut self, f: &mut dyn FnMut(&mut dyn SelectorControl)) {
        for element in self.elements.iter_mut().filter(|e| e.is_selector()) {
            f(element as &mut dyn SelectorControl);
        }
    }

    fn for_each_localized_element(&mut self, f: &mut dyn FnMut(&mut dyn LocalizedElement)) {
        for element in self
            .elements
            .iter_mut()
            .filter(|e| e.declares_localized_text())
        {
            f(element as &mut dyn LocalizedElement);
        }
    }
}
