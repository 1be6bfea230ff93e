//! Bilingual (Arabic/English) language switcher for the portfolio site.
//!
//! A [`LanguageSwitcher`](switcher::LanguageSwitcher) reads the stored
//! preference from a [`PreferenceStore`](store::PreferenceStore) and renders
//! any [`RenderSurface`](page::RenderSurface) in that language and direction.

pub mod config;
pub mod i18n;
pub mod page;
pub mod report;
pub mod store;
pub mod switcher;
