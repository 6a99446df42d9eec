pub mod config;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::AppConfig;
use services::{
    catalog_service::{CatalogError, SuggestionCatalog},
    gemini_service::GeminiClient,
    suggestion_service::SuggestionResolver,
};

/// Loads the catalog and wires up the resolver described by `config`.
/// A catalog that cannot be loaded is fatal; a Gemini client that cannot be
/// built only disables generation.
pub fn build_resolver(config: &AppConfig) -> Result<SuggestionResolver, CatalogError> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            log::info!("Loading catalog from {}", path.display());
            SuggestionCatalog::load(path)?
        }
        None => SuggestionCatalog::builtin()?,
    };
    log::info!(
        "Catalog ready with {} curated combinations",
        catalog.combination_count()
    );

    let generator = match GeminiClient::new(&config.gemini) {
        Ok(client) => {
            if config.gemini.api_key.is_some() {
                log::info!(
                    "Gemini generation enabled via {}",
                    client.endpoint().host_str().unwrap_or("custom endpoint")
                );
            } else {
                log::info!("GEMINI_API_KEY not set, serving catalog suggestions only");
            }
            Some(client)
        }
        Err(e) => {
            log::warn!("Gemini client not available: {}. Serving catalog only.", e);
            None
        }
    };

    Ok(SuggestionResolver::new(Arc::new(catalog), generator)
        .with_max_count(config.max_suggestions))
}
