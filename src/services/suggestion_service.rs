use crate::config::DEFAULT_MAX_SUGGESTIONS;
use crate::models::suggestion::{ActivitySuggestion, SelectionCriteria};
use crate::services::catalog_service::SuggestionCatalog;
use crate::services::gemini_service::GeminiClient;
use crate::services::generator::SuggestionGenerator;
use crate::services::suggestion_merge::merge;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// No credential configured.
    CatalogOnly,
    /// Generation was attempted and failed.
    CatalogFallback,
    Merged,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub suggestions: Vec<ActivitySuggestion>,
    pub source: ResolutionSource,
}

pub struct SuggestionResolver<G = GeminiClient> {
    catalog: Arc<SuggestionCatalog>,
    generator: Option<G>,
    max_count: usize,
}

impl<G: SuggestionGenerator> SuggestionResolver<G> {
    pub fn new(catalog: Arc<SuggestionCatalog>, generator: Option<G>) -> Self {
        Self {
            catalog,
            generator,
            max_count: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count.max(1);
        self
    }

    pub fn catalog(&self) -> &SuggestionCatalog {
        &self.catalog
    }

    pub fn generator(&self) -> Option<&G> {
        self.generator.as_ref()
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn generation_enabled(&self) -> bool {
        self.generator
            .as_ref()
            .map_or(false, |generator| generator.is_configured())
    }

    /// Always answers: generation problems degrade to the catalog list.
    pub async fn resolve(&self, criteria: &SelectionCriteria) -> Resolution {
        let mut catalog_result = self.catalog.lookup(criteria);

        let generator = match &self.generator {
            Some(generator) if generator.is_configured() => generator,
            _ => {
                catalog_result.truncate(self.max_count);
                log::debug!(
                    "Resolved {} suggestions for {:?} from the catalog",
                    catalog_result.len(),
                    criteria
                );
                return Resolution {
                    suggestions: catalog_result,
                    source: ResolutionSource::CatalogOnly,
                };
            }
        };

        match generator.fetch_generated(criteria).await {
            Ok(generated) => {
                let generated_count = generated.len();
                let suggestions = merge(catalog_result, generated, self.max_count);
                log::debug!(
                    "Merged {} generated suggestions for {:?} into {} results",
                    generated_count,
                    criteria,
                    suggestions.len()
                );
                Resolution {
                    suggestions,
                    source: ResolutionSource::Merged,
                }
            }
            Err(err) => {
                log::warn!("Suggestion generation failed, using catalog: {}", err);
                catalog_result.truncate(self.max_count);
                Resolution {
                    suggestions: catalog_result,
                    source: ResolutionSource::CatalogFallback,
                }
            }
        }
    }
}
