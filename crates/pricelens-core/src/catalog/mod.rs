//! Candidate retrieval by category and price band.
//!
//! `CatalogProvider` is the seam where a live storefront scraper plugs in.
//! `FixtureCatalog` answers from the built-in sample table and synthesizes
//! placeholder listings for unknown categories.

pub mod fixtures;
pub mod generic;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::debug;

use crate::config::CatalogSettings;
use crate::error::{PriceLensError, PriceLensResult};
use crate::model::ProductRecord;
pub use fixtures::{FixtureGroup, FixtureProduct, FIXTURE_GROUPS};

/// Default simulated request latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(1);

/// Upper end of the default search price band.
pub const DEFAULT_MAX_PRICE: f64 = 200_000.0;

/// Source of candidate listings.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Listings for `category` priced inside `[min_price, max_price]`.
    async fn retrieve(
        &self,
        category: &str,
        min_price: f64,
        max_price: f64,
    ) -> PriceLensResult<Vec<ProductRecord>>;
}

/// Validate a category and price band.
pub fn check_query(category: &str, min_price: f64, max_price: f64) -> PriceLensResult<()> {
    if category.trim().is_empty() {
        return Err(PriceLensError::invalid_input("category must not be empty"));
    }
    if !min_price.is_finite() || !max_price.is_finite() {
        return Err(PriceLensError::invalid_input("prices must be finite numbers"));
    }
    if min_price < 0.0 {
        return Err(PriceLensError::invalid_input(format!(
            "minimum price {} is negative",
            min_price
        )));
    }
    if min_price > max_price {
        return Err(PriceLensError::invalid_input(format!(
            "minimum price {} exceeds maximum price {}",
            min_price, max_price
        )));
    }
    Ok(())
}

/// The fixture group a category selects, if any.
pub fn classify(category: &str) -> Option<&'static FixtureGroup> {
    let lower = category.to_lowercase();
    FIXTURE_GROUPS.iter().find(|group| group.matches(&lower))
}

/// Catalog backed by the built-in sample table.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    latency: Duration,
    seed: Option<u64>,
}

impl FixtureCatalog {
    /// Create a catalog with the default latency and an unseeded generator.
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            seed: None,
        }
    }

    /// Create a catalog from loaded settings.
    pub fn from_settings(settings: &CatalogSettings) -> Self {
        Self {
            latency: Duration::from_millis(settings.delay_ms),
            seed: settings.seed,
        }
    }

    /// Set the simulated latency. Zero disables it.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Seed placeholder generation so results are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Synchronous lookup with no simulated latency.
    pub fn lookup(&self, category: &str, min_price: f64, max_price: f64) -> Vec<ProductRecord> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        lookup_with_rng(category, min_price, max_price, &mut rng)
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for FixtureCatalog {
    async fn retrieve(
        &self,
        category: &str,
        min_price: f64,
        max_price: f64,
    ) -> PriceLensResult<Vec<ProductRecord>> {
        check_query(category, min_price, max_price)?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(self.lookup(category, min_price, max_price))
    }
}

/// Resolve a category against the fixture table, drawing placeholder
/// listings from `rng` when no group matches.
pub fn lookup_with_rng<R: Rng>(
    category: &str,
    min_price: f64,
    max_price: f64,
    rng: &mut R,
) -> Vec<ProductRecord> {
    match classify(category) {
        Some(group) => {
            let products = group.within(min_price, max_price);
            debug!(group = group.id, count = products.len(), "Fixture group matched");
            products
        }
        None => {
            let products = generic::generate(category, min_price, max_price, rng);
            debug!(
                category = %category,
                product_type = generic::product_type(category),
                count = products.len(),
                "No fixture group matched, generated placeholders"
            );
            products
        }
    }
}
