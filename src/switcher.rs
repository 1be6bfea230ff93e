//! Language switcher: keeps the rendered page consistent with the stored
//! language preference.
//!
//! Every switch runs the same steps in order: persist the tag, write the
//! document `lang`/`dir`, mark the matching selector control active, and
//! re-render every localized element. Nothing is cached between passes; the
//! surface is re-walked each time.

use crate::i18n::Language;
use crate::page::{LocalizedElement, RenderSurface};
use crate::report::RenderReport;
use crate::store::{PreferenceStore, StoreError};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("unsupported language tag: '{0}'")]
    UnsupportedLanguage(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct LanguageSwitcher<S> {
    store: S,
    current: Language,
}

impl<S: PreferenceStore> LanguageSwitcher<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: Language::default_language(),
        }
    }

    /// Language applied by the most recent pass.
    pub fn current(&self) -> Language {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply the stored preference to `surface`, or the default language
    /// when none is stored. Never fails: unreadable or unknown stored values
    /// are logged and replaced by the default for this session only.
    pub fn initialize<R>(&mut self, surface: &mut R) -> RenderReport
    where
        R: RenderSurface + ?Sized,
    {
        self.current = self.stored_language();
        info!("Initializing page in {}", self.current.name());
        self.apply(surface)
    }

    /// Switch to `code`, persisting it before anything is rendered.
    ///
    /// Unknown tags are rejected and leave the store and the surface as they
    /// were. A failed write is returned without re-rendering.
    pub fn set_language<R>(&mut self, code: &str, surface: &mut R) -> Result<RenderReport, SwitchError>
    where
        R: RenderSurface + ?Sized,
    {
        let language = Language::from_code(code)
            .map_err(|_| SwitchError::UnsupportedLanguage(code.to_string()))?;

        self.store.set(language.code())?;
        self.current = language;
        info!("Language changed to {}", language.name());

        Ok(self.apply(surface))
    }

    fn stored_language(&self) -> Language {
        let fallback = Language::default_language();

        match self.store.get() {
            Ok(Some(tag)) => match Language::from_code(&tag) {
                Ok(language) => language,
                Err(e) => {
                    warn!("Ignoring stored language preference: {}", e);
                    fallback
                }
            },
            Ok(None) => {
                debug!("No stored language preference, using {}", fallback);
                fallback
            }
            Err(e) => {
                warn!("Failed to read language preference: {}", e);
                fallback
            }
        }
    }

    fn apply<R>(&self, surface: &mut R) -> RenderReport
    where
        R: RenderSurface + ?Sized,
    {
        let language = self.current;
        let mut report = RenderReport::new(language);

        surface.set_document_language(language, language.direction());

        surface.for_each_selector(&mut |control| {
            let active = control.language_tag() == Some(language.code());
            control.set_active(active);
            report.selectors_updated += 1;
        });

        let languages = Language::all();
        surface.for_each_localized_element(&mut |element| {
            render_element(element, language, &languages, &mut report);
        });

        debug!(
            "Rendered {} elements in {} ({} skipped, {} selectors)",
            report.rendered(),
            language,
            report.elements_skipped,
            report.selectors_updated
        );

        report
    }
}

fn render_element(
    element: &mut dyn LocalizedElement,
    language: Language,
    languages: &[Language],
    report: &mut RenderReport,
) {
    if !languages
        .iter()
        .all(|lang| element.localized_text(*lang).is_some())
    {
        report.elements_skipped += 1;
        return;
    }

    if element.is_input_like() {
        if let Some(placeholder) = element.localized_placeholder(language).map(str::to_owned) {
            element.set_placeholder(&placeholder);
            report.placeholders_rendered += 1;
        }
    } else if let Some(text) = element.localized_text(language).map(str::to_owned) {
        element.set_text(&text);
        report.texts_rendered += 1;
    }
}
