//! Outcome of a render pass.

use crate::i18n::{Language, TextDirection};
use serde::Serialize;

/// Counts collected while the switcher renders a surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    /// Language code the surface was rendered in
    pub language: &'static str,

    pub direction: TextDirection,

    /// Number of selector controls whose active state was written
    pub selectors_updated: usize,

    /// Number of elements whose text content was replaced
    pub texts_rendered: usize,

    /// Number of input-like elements whose placeholder was replaced
    pub placeholders_rendered: usize,

    /// Number of localized elements left untouched because a language
    /// variant was missing
    pub elements_skipped: usize,
}

impl RenderReport {
    pub fn new(language: Language) -> Self {
        Self {
            language: language.code(),
            direction: language.direction(),
            selectors_updated: 0,
            texts_rendered: 0,
            placeholders_rendered: 0,
            elements_skipped: 0,
        }
    }

    /// Total number of elements whose content changed language.
    pub fn rendered(&self) -> usize {
        self.texts_rendered + self.placeholders_rendered
    }
}
