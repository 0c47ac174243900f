//! Analysis domain models.
//!
//! `AnalysisResult` is the one output shape shared by the model-backed and
//! heuristic paths. Its JSON form is also the contract the language model
//! is asked to answer in, so field names here are part of the prompt.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Upper bound on `top_products` in any result.
pub const MAX_TOP_PRODUCTS: usize = 5;

/// Upper bound on each sentiment point list.
pub const MAX_POINTS: usize = 3;

/// A candidate product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    pub rating: f64,
    #[serde(default)]
    pub reviews: Vec<String>,
}

/// Price statistics over a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl PriceStats {
    /// Compute min, max and mean. All zero for an empty list.
    pub fn from_prices<I>(prices: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for price in prices {
            count += 1;
            sum += price;
            min = min.min(price);
            max = max.max(price);
        }

        if count == 0 {
            return Self::default();
        }

        // Float summation can drift a hair outside the observed band.
        let average = (sum / count as f64).clamp(min, max);
        Self { min, max, average }
    }
}

/// Overall review sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    Positive,
    #[default]
    Mixed,
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl Sentiment {
    /// Classify from the number of positive and negative points.
    ///
    /// Equal counts, including zero and zero, are `Mixed`.
    pub fn from_counts(positive: usize, negative: usize) -> Self {
        if positive > negative * 2 {
            Self::VeryPositive
        } else if positive > negative {
            Self::Positive
        } else if negative > positive * 2 {
            Self::VeryNegative
        } else if negative > positive {
            Self::Negative
        } else {
            Self::Mixed
        }
    }

    /// Convert to display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryPositive => "Very Positive",
            Self::Positive => "Positive",
            Self::Mixed => "Mixed",
            Self::Negative => "Negative",
            Self::VeryNegative => "Very Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment verdict plus supporting review snippets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub overall: Sentiment,
    #[serde(default)]
    pub positive_points: Vec<String>,
    #[serde(default)]
    pub negative_points: Vec<String>,
}

/// The canonical analysis output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub top_products: Vec<ProductRecord>,
    pub price_range: PriceStats,
    pub sentiment: SentimentSummary,
}

/// A structural bound an `AnalysisResult` broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    #[error("{found} top products reported, at most {allowed} allowed")]
    TooManyProducts { found: usize, allowed: usize },

    #[error("{found} {kind} points reported, at most {} allowed", MAX_POINTS)]
    TooManyPoints { kind: &'static str, found: usize },
}

impl AnalysisResult {
    /// The result for an empty candidate list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check the cardinality bounds against the number of candidates the
    /// result was produced from.
    pub fn check_shape(&self, candidates: usize) -> Result<(), ShapeViolation> {
        let allowed = MAX_TOP_PRODUCTS.min(candidates);
        if self.top_products.len() > allowed {
            return Err(ShapeViolation::TooManyProducts {
                found: self.top_products.len(),
                allowed,
            });
        }

        if self.sentiment.positive_points.len() > MAX_POINTS {
            return Err(ShapeViolation::TooManyPoints {
                kind: "positive",
                found: self.sentiment.positive_points.len(),
            });
        }

        if self.sentiment.negative_points.len() > MAX_POINTS {
            return Err(ShapeViolation::TooManyPoints {
                kind: "negative",
                found: self.sentiment.negative_points.len(),
            });
        }

        Ok(())
    }
}
