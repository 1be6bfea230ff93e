//! Internationalization (i18n) module for the bilingual portfolio.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Validated `Language` handle built from a language tag
//! - `direction`: Right-to-left / left-to-right document flow
//! - `iso639`: ISO 639-1 code table used by the audit
//! - `validator`: Audit of the localized markup contract
//!
//! # Example
//!
//! ```rust
//! use portfolio_i18n::i18n::{Language, TextDirection};
//!
//! let arabic = Language::default_language();
//! assert_eq!(arabic.direction(), TextDirection::Rtl);
//!
//! let english = Language::from_code("en").unwrap();
//! assert_eq!(english.text_attribute(), "data-en");
//! ```

mod direction;
mod iso639;
mod language;
mod registry;
mod validator;

pub use direction::TextDirection;
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{MarkupValidator, ValidationReport};
