use crate::store::DEFAULT_STORAGE_KEY;
use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON model of the portfolio page
    pub page_file: PathBuf,

    /// JSON file holding persisted preferences
    pub preference_file: PathBuf,

    /// Key the language preference is stored under
    pub storage_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let storage_key = std::env::var("PORTFOLIO_STORAGE_KEY")
            .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());
        if storage_key.trim().is_empty() {
            bail!("PORTFOLIO_STORAGE_KEY must not be empty");
        }

        Ok(Self {
            page_file: std::env::var("PORTFOLIO_PAGE_FILE")
                .unwrap_or_else(|_| "data/portfolio_page.json".to_string())
                .into(),
            preference_file: std::env::var("PORTFOLIO_PREFERENCE_FILE")
                .unwrap_or_else(|_| "data/preferences.json".to_string())
                .into(),
            storage_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 3] = [
        "PORTFOLIO_PAGE_FILE",
        "PORTFOLIO_PREFERENCE_FILE",
        "PORTFOLIO_STORAGE_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.page_file, PathBuf::from("data/portfolio_page.json"));
        assert_eq!(config.preference_file, PathBuf::from("data/preferences.json"));
        assert_eq!(config.storage_key, "language");
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORTFOLIO_PAGE_FILE", "/tmp/page.json");
        std::env::set_var("PORTFOLIO_PREFERENCE_FILE", "/tmp/prefs.json");
        std::env::set_var("PORTFOLIO_STORAGE_KEY", "site-language");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.page_file, PathBuf::from("/tmp/page.json"));
        assert_eq!(config.preference_file, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.storage_key, "site-language");
    }

    #[test]
    #[serial]
    fn test_empty_storage_key_is_rejected() {
        clear_env();
        std::env::set_var("PORTFOLIO_STORAGE_KEY", "   ");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must not be empty"));
    }
}
