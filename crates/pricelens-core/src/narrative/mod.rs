//! Model-backed analysis with a deterministic fallback.
//!
//! One prompt, one completion, one parse. Anything that goes wrong on the
//! way (no model, transport error, time box, unparsable or oversized
//! reply) resolves to [`summarize`] over the same candidates.

pub mod prompt;

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::completion::{Completion, CompletionError};
use crate::config::DEFAULT_COMPLETION_TIMEOUT_SECS;
use crate::model::{AnalysisResult, ProductRecord, ShapeViolation};
use crate::summary::summarize;

/// Why a model reply was rejected.
#[derive(Error, Debug)]
pub enum ParseFailure {
    #[error("no JSON object in reply")]
    NoJsonObject,

    #[error("reply is not a valid analysis: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("reply is out of shape: {0}")]
    Shape(#[from] ShapeViolation),
}

/// Parse a model reply.
///
/// The span from the first `{` to the last `}` must deserialize into an
/// `AnalysisResult` and pass the shape check for `candidates` inputs.
pub fn parse_response(text: &str, candidates: usize) -> Result<AnalysisResult, ParseFailure> {
    let start = text.find('{').ok_or(ParseFailure::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ParseFailure::NoJsonObject)?;
    if end < start {
        return Err(ParseFailure::NoJsonObject);
    }

    let result: AnalysisResult = serde_json::from_str(&text[start..=end])?;
    result.check_shape(candidates)?;
    Ok(result)
}

/// Run the model path once within `timeout`, falling back on any failure.
pub async fn analyze_within(
    products: &[ProductRecord],
    completion: &dyn Completion,
    timeout: Duration,
) -> AnalysisResult {
    if products.is_empty() {
        return summarize(products);
    }

    let prompt = match prompt::build_prompt(products) {
        Ok(prompt) => prompt,
        Err(e) => {
            warn!(error = %e, "Failed to build prompt, using heuristic summary");
            return summarize(products);
        }
    };
    debug!(
        backend = completion.name(),
        prompt_chars = prompt.len(),
        candidates = products.len(),
        "Requesting completion"
    );

    let reply = match tokio::time::timeout(timeout, completion.complete(&prompt)).await {
        Ok(Ok(reply)) => reply,
        Ok(Err(e)) => {
            warn!(backend = completion.name(), error = %e, "Completion failed, using heuristic summary");
            return summarize(products);
        }
        Err(_) => {
            let e = CompletionError::Timeout(timeout);
            warn!(backend = completion.name(), error = %e, "Completion failed, using heuristic summary");
            return summarize(products);
        }
    };

    match parse_response(&reply, products.len()) {
        Ok(result) => {
            info!(
                backend = completion.name(),
                candidates = products.len(),
                top = result.top_products.len(),
                "Model analysis accepted"
            );
            result
        }
        Err(e) => {
            warn!(
                backend = completion.name(),
                error = %e,
                reply_chars = reply.len(),
                "Unparsable model reply, using heuristic summary"
            );
            summarize(products)
        }
    }
}

/// Run the model path once with the default time box.
pub async fn analyze_with_model(
    products: &[ProductRecord],
    completion: &dyn Completion,
) -> AnalysisResult {
    analyze_within(
        products,
        completion,
        Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
    )
    .await
}

/// Narrative analysis stage with an optional injected model.
#[derive(Clone)]
pub struct NarrativeAnalyzer {
    completion: Option<Arc<dyn Completion>>,
    timeout: Duration,
}

impl NarrativeAnalyzer {
    /// Analyzer that consults `completion` with the default time box.
    pub fn new(completion: Arc<dyn Completion>) -> Self {
        Self::from_parts(Some(completion), Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS))
    }

    /// Analyzer with no model; always summarizes.
    pub fn heuristic_only() -> Self {
        Self::from_parts(None, Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS))
    }

    /// Analyzer from an optional model and a time box.
    pub fn from_parts(completion: Option<Arc<dyn Completion>>, timeout: Duration) -> Self {
        Self { completion, timeout }
    }

    /// Whether a model is configured.
    pub fn has_model(&self) -> bool {
        self.completion.is_some()
    }

    /// Name of the configured backend, if any.
    pub fn backend(&self) -> Option<&str> {
        self.completion.as_deref().map(|c| c.name())
    }

    /// Analyze candidates. Never fails.
    pub async fn analyze(&self, products: &[ProductRecord]) -> AnalysisResult {
        match &self.completion {
            Some(completion) => analyze_within(products, completion.as_ref(), self.timeout).await,
            None => {
                info!(candidates = products.len(), "No model configured, using heuristic summary");
                summarize(products)
            }
        }
    }
}

impl std::fmt::Debug for NarrativeAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeAnalyzer")
            .field("backend", &self.backend())
            .field("timeout", &self.timeout)
            .finish()
    }
}
