//! Integration tests for the portfolio language switcher
//!
//! These tests drive the switcher against the bundled portfolio page and a
//! file-backed preference store, the way the command-line tool does.

use std::path::PathBuf;
use tempfile::TempDir;

use portfolio_i18n::{
    i18n::{Language, MarkupValidator, TextDirection},
    page::{Element, Page, ACTIVE_CLASS},
    store::{FileStore, MemoryStore, PreferenceStore},
    switcher::{LanguageSwitcher, SwitchError},
};

// ==================== Test Helpers ====================

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/portfolio_page.json")
}

fn load_fixture() -> Page {
    Page::load(fixture_path()).expect("Failed to load portfolio page fixture")
}

fn text_of<'a>(page: &'a Page, id: &str) -> &'a str {
    &page.element_by_id(id).expect("element should exist").text
}

fn placeholder_of<'a>(page: &'a Page, id: &str) -> Option<&'a str> {
    page.element_by_id(id)
        .expect("element should exist")
        .placeholder
        .as_deref()
}

// ==================== Fixture Tests ====================

#[test]
fn test_fixture_markup_is_clean() {
    let report = MarkupValidator::validate(&load_fixture());
    assert!(report.is_clean(), "fixture findings: {:?}", report);
}

#[test]
fn test_fixture_renders_every_localized_element() {
    let mut page = load_fixture();
    let mut switcher = LanguageSwitcher::new(MemoryStore::new());

    let report = switcher.set_language("en", &mut page).unwrap();

    assert_eq!(report.elements_skipped, 0);
    assert_eq!(report.texts_rendered, 8);
    assert_eq!(report.placeholders_rendered, 3);
    assert_eq!(report.selectors_updated, 2);
}

// ==================== Reload Tests ====================

#[test]
fn test_preference_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("preferences.json");

    // First visit: pick English
    let mut page = load_fixture();
    let mut switcher = LanguageSwitcher::new(FileStore::new(&prefs));
    switcher.initialize(&mut page);
    switcher.set_language("en", &mut page).unwrap();

    // Reload: fresh page from markup, fresh store handle
    let mut reloaded = load_fixture();
    let mut switcher = LanguageSwitcher::new(FileStore::new(&prefs));
    switcher.initialize(&mut reloaded);

    assert_eq!(reloaded.lang, "en");
    assert_eq!(reloaded.dir, TextDirection::Ltr);
    assert_eq!(text_of(&reloaded, "nav-projects"), "Projects");
    assert_eq!(placeholder_of(&reloaded, "contact-email"), Some("Your email"));
    assert_eq!(reloaded.active_selector_tag(), Some("en"));
}

#[test]
fn test_first_visit_renders_arabic() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().join("preferences.json"));

    let mut page = load_fixture();
    // Start from an English rendering so the default pass has work to do
    LanguageSwitcher::new(MemoryStore::new())
        .set_language("en", &mut page)
        .unwrap();

    let mut switcher = LanguageSwitcher::new(store);
    switcher.initialize(&mut page);

    assert_eq!(page.lang, "ar");
    assert_eq!(page.dir, TextDirection::Rtl);
    assert_eq!(text_of(&page, "nav-home"), "الرئيسية");
    assert_eq!(placeholder_of(&page, "contact-name"), Some("اسمك"));
    assert_eq!(switcher.store().get().unwrap(), None);
}

#[test]
fn test_custom_storage_key() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("preferences.json");

    let mut page = load_fixture();
    LanguageSwitcher::new(FileStore::with_key(&prefs, "site-language"))
        .set_language("en", &mut page)
        .unwrap();

    assert_eq!(FileStore::new(&prefs).get().unwrap(), None);
    assert_eq!(
        FileStore::with_key(&prefs, "site-language")
            .get()
            .unwrap()
            .as_deref(),
        Some("en")
    );
}

// ==================== Switching Tests ====================

#[test]
fn test_switch_back_and_forth() {
    let mut page = load_fixture();
    let mut switcher = LanguageSwitcher::new(MemoryStore::new());
    switcher.initialize(&mut page);

    switcher.set_language("en", &mut page).unwrap();
    assert_eq!(text_of(&page, "nav-home"), "Home");
    assert_eq!(text_of(&page, "contact-submit"), "Send");
    assert_eq!(page.dir, TextDirection::Ltr);

    switcher.set_language("ar", &mut page).unwrap();
    assert_eq!(text_of(&page, "nav-home"), "الرئيسية");
    assert_eq!(text_of(&page, "contact-submit"), "إرسال");
    assert_eq!(page.dir, TextDirection::Rtl);
}

#[test]
fn test_non_selector_active_classes_are_untouched() {
    let mut page = load_fixture();
    let mut switcher = LanguageSwitcher::new(MemoryStore::new());

    switcher.set_language("en", &mut page).unwrap();

    let filter = page.element_by_id("filter-all").unwrap();
    assert!(filter.has_class(ACTIVE_CLASS));
    assert_eq!(filter.text, "All");
}

#[test]
fn test_unlocalized_footer_is_untouched() {
    let mut page = load_fixture();
    let mut switcher = LanguageSwitcher::new(MemoryStore::new());

    for code in ["en", "ar", "en"] {
        switcher.set_language(code, &mut page).unwrap();
    }

    assert_eq!(text_of(&page, "footer-copy"), "© 2024");
}

#[test]
fn test_unsupported_language_leaves_store_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("preferences.json");

    let mut page = load_fixture();
    let mut switcher = LanguageSwitcher::new(FileStore::new(&prefs));
    switcher.set_language("en", &mut page).unwrap();

    let err = switcher.set_language("de", &mut page).unwrap_err();

    assert!(matches!(err, SwitchError::UnsupportedLanguage(_)));
    assert_eq!(err.to_string(), "unsupported language tag: 'de'");
    assert_eq!(FileStore::new(&prefs).get().unwrap().as_deref(), Some("en"));
    assert_eq!(page.lang, "en");
}

#[test]
fn test_store_write_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the preference file should be makes the write fail
    let prefs = temp_dir.path().join("preferences.json");
    std::fs::create_dir_all(&prefs).unwrap();

    let mut page = load_fixture();
    let mut switcher = LanguageSwitcher::new(FileStore::new(&prefs));
    switcher.initialize(&mut page);
    let before = page.clone();

    let err = switcher.set_language("en", &mut page).unwrap_err();

    assert!(matches!(err, SwitchError::Store(_)));
    assert_eq!(page, before);
    assert_eq!(switcher.current(), Language::ARABIC);
}

// ==================== Page Round-Trip Tests ====================

#[test]
fn test_rendered_page_serializes_direction() {
    let mut page = Page::new(vec![
        Element::selector("ar"),
        Element::selector("en"),
        Element::localized("h2", "Skills", "المهارات"),
    ]);
    let mut switcher = LanguageSwitcher::new(MemoryStore::new());
    switcher.set_language("en", &mut page).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&page.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["lang"], "en");
    assert_eq!(json["dir"], "ltr");
    assert_eq!(json["elements"][2]["text"], "Skills");
}
