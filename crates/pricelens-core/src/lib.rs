//! PriceLens Core Library
//!
//! Catalog retrieval, heuristic summarization and model-backed narrative
//! analysis of product listings.

pub mod analyzer;
pub mod catalog;
pub mod completion;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod narrative;
pub mod platform;
pub mod summary;

pub use analyzer::Analyzer;
pub use catalog::{CatalogProvider, FixtureCatalog};
pub use completion::{Completion, CompletionError};
pub use config::Settings;
pub use error::{PriceLensError, PriceLensResult};
pub use model::{AnalysisResult, PriceStats, ProductRecord, Sentiment, SentimentSummary};
pub use narrative::NarrativeAnalyzer;
pub use platform::Platform;
pub use summary::summarize;
