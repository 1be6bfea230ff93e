//! Portfolio language tool - renders the portfolio page in the stored
//! language, switches it, or audits its markup.
//!
//! Usage:
//!   cargo run                  # Render the page in the stored language
//!   cargo run -- set en        # Store "en" and render the page in English
//!   cargo run -- audit         # Report markup the switcher cannot render
//!
//! Optional environment variables:
//! - PORTFOLIO_PAGE_FILE (defaults to data/portfolio_page.json)
//! - PORTFOLIO_PREFERENCE_FILE (defaults to data/preferences.json)
//! - PORTFOLIO_STORAGE_KEY (defaults to language)

use anyhow::{bail, Context, Result};
use portfolio_i18n::config::Config;
use portfolio_i18n::i18n::MarkupValidator;
use portfolio_i18n::page::Page;
use portfolio_i18n::store::FileStore;
use portfolio_i18n::switcher::LanguageSwitcher;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so rendered JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_i18n=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = Config::from_env()?;
    info!("Loading page from {}", config.page_file.display());
    let mut page = Page::load(&config.page_file)?;

    let store = FileStore::with_key(&config.preference_file, config.storage_key.clone());
    let mut switcher = LanguageSwitcher::new(store);

    match args.first().map(String::as_str) {
        None | Some("render") => {
            let report = switcher.initialize(&mut page);
            info!("Rendered {} elements", report.rendered());
            println!("{}", page.to_json_pretty()?);
        }
        Some("set") => {
            let code = args.get(1).context("Usage: portfolio-i18n set <ar|en>")?;
            let report = switcher.set_language(code, &mut page)?;
            info!(
                "Stored '{}' in {}",
                report.language,
                config.preference_file.display()
            );
            println!("{}", page.to_json_pretty()?);
        }
        Some("audit") => {
            let report = MarkupValidator::validate(&page);
            println!("{}", serde_json::to_string_pretty(&report)?);

            for warning in &report.warnings {
                warn!("{}", warning);
            }
            if report.has_errors() {
                bail!("Page markup has {} error(s)", report.errors.len());
            }
            info!("✓ Page markup is valid");
        }
        Some(other) => bail!("Unknown command '{}'. Expected render, set or audit", other),
    }

    Ok(())
}
