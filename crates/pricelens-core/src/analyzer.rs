//! Analysis entry point: validate, retrieve, analyze.

use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::catalog::{check_query, CatalogProvider, FixtureCatalog};
use crate::completion::Completion;
use crate::config::Settings;
use crate::error::PriceLensResult;
use crate::model::{AnalysisResult, ProductRecord};
use crate::narrative::NarrativeAnalyzer;
use crate::platform::Platform;

/// Orchestrates one analysis request.
#[derive(Clone)]
pub struct Analyzer {
    catalog: Arc<dyn CatalogProvider>,
    narrative: Arc<NarrativeAnalyzer>,
}

impl Analyzer {
    /// Create an analyzer from its collaborators.
    pub fn new(catalog: Arc<dyn CatalogProvider>, narrative: NarrativeAnalyzer) -> Self {
        Self {
            catalog,
            narrative: Arc::new(narrative),
        }
    }

    /// Create the fixture-backed analyzer described by `settings`.
    pub fn from_settings(settings: &Settings, completion: Option<Arc<dyn Completion>>) -> Self {
        let catalog = FixtureCatalog::from_settings(&settings.catalog);
        let narrative = NarrativeAnalyzer::from_parts(completion, settings.completion_timeout());
        Self::new(Arc::new(catalog), narrative)
    }

    /// Whether a model backs the narrative stage.
    pub fn has_model(&self) -> bool {
        self.narrative.has_model()
    }

    /// Describe the configured engine. A model may still fall back to the
    /// heuristic for an individual request.
    pub fn engine_label(&self) -> String {
        match self.narrative.backend() {
            Some(name) => format!("{} model, heuristic fallback", name),
            None => "heuristic only".to_string(),
        }
    }

    /// Validate the request and return the candidates for it.
    pub async fn candidates(
        &self,
        category: &str,
        min_price: f64,
        max_price: f64,
    ) -> PriceLensResult<Vec<ProductRecord>> {
        check_query(category, min_price, max_price)?;
        self.catalog.retrieve(category.trim(), min_price, max_price).await
    }

    /// Analyze `category` listings on `platform` priced inside
    /// `[min_price, max_price]`.
    ///
    /// Fails only on invalid input or a catalog error. Model failures
    /// degrade to the heuristic summary.
    pub async fn analyze(
        &self,
        platform: &str,
        category: &str,
        min_price: f64,
        max_price: f64,
    ) -> PriceLensResult<AnalysisResult> {
        let platform: Platform = platform.parse()?;
        let started = Instant::now();

        let products = self.candidates(category, min_price, max_price).await?;
        info!(
            platform = %platform,
            category = %category.trim(),
            min_price,
            max_price,
            candidates = products.len(),
            "Retrieved candidates"
        );

        let result = self.narrative.analyze(&products).await;
        info!(
            top = result.top_products.len(),
            sentiment = %result.sentiment.overall,
            model = self.has_model(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Analysis complete"
        );

        Ok(result)
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("narrative", &self.narrative)
            .finish_non_exhaustive()
    }
}
