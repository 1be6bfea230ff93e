//! Text direction of a rendered document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout flow of a document, written to its `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Right-to-left (Arabic)
    Rtl,
    /// Left-to-right
    #[default]
    Ltr,
}

impl TextDirection {
    /// The attribute value: `"rtl"` or `"ltr"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
        assert_eq!(TextDirection::Ltr.as_str(), "ltr");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(TextDirection::Rtl.to_string(), "rtl");
        assert_eq!(TextDirection::Ltr.to_string(), "ltr");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TextDirection::Rtl).unwrap(), "\"rtl\"");
        let dir: TextDirection = serde_json::from_str("\"ltr\"").unwrap();
        assert_eq!(dir, TextDirection::Ltr);
    }

    #[test]
    fn test_is_rtl() {
        assert!(TextDirection::Rtl.is_rtl());
        assert!(!TextDirection::Ltr.is_rtl());
    }
}
