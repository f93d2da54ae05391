//! gofire-console - print the supported languages and the resolved one
//!
//! Usage:
//!   cargo run                 # Resolve GOFIRE_LANGUAGE (or the default)
//!   cargo run -- zh-SG        # Resolve an explicit identifier
//!
//! Optional environment variables:
//! - GOFIRE_PRODUCT (defaults to gofire)
//! - GOFIRE_DEBUG (defaults to false)
//! - GOFIRE_LANGUAGE

use anyhow::{Context, Result};
use gofire_console::config::Config;
use gofire_console::console::ConsoleLogger;
use gofire_console::i18n::{Language, LocaleRegistry, TranslationValidator};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gofire_console=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let settings = Arc::new(config.settings());
    let console = ConsoleLogger::new(config.product.clone(), settings);

    let registry = LocaleRegistry::builtin().context("Failed to build locale registry")?;
    info!("Loaded {} languages", registry.len());

    let report = TranslationValidator::validate(&registry);
    for issue in &report.errors {
        error!("Translation coverage: {}", issue);
    }
    for issue in &report.warnings {
        warn!("Translation coverage: {}", issue);
    }
    console.debug_with(
        "Translation coverage",
        &json!({ "errors": report.errors.len(), "warnings": report.warnings.len() }),
    )?;

    for descriptor in registry.list_languages() {
        console.info_with(descriptor.display_name, descriptor)?;
    }

    let requested = std::env::args().nth(1).or_else(|| config.language.clone());
    let language = match requested.as_deref() {
        Some(id) => match Language::from_identifier(&registry, id) {
            Ok(language) => language,
            Err(e) => {
                console.warn_with(
                    "Unknown language, using default",
                    &json!({ "requested": id, "error": e.to_string() }),
                )?;
                Language::default_for(&registry)
            }
        },
        None => Language::default_for(&registry),
    };

    console.info(&format!("Language: {} [{}]", language, language.key()))?;
    console.debug_with(
        "Translation table",
        &json!({ "key": language.key(), "entries": language.descriptor().content.len() }),
    )?;

    Ok(())
}
