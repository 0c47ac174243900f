//! End-to-end pipeline tests through the public API.

use async_trait::async_trait;
use pricelens_core::catalog::FixtureCatalog;
use pricelens_core::narrative::NarrativeAnalyzer;
use pricelens_core::{
    summarize, Analyzer, AnalysisResult, Completion, CompletionError, Sentiment, Settings,
};
use std::sync::Arc;
use std::time::Duration;

/// Echoes the first candidate named in the prompt back as a well-formed reply.
struct EchoFirstCandidate;

#[async_trait]
impl Completion for EchoFirstCandidate {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let start = prompt
            .find("[")
            .ok_or_else(|| CompletionError::unavailable("no listing in prompt"))?;
        let end = prompt
            .find("\n]")
            .ok_or_else(|| CompletionError::unavailable("no listing in prompt"))?;
        let listing: serde_json::Value = serde_json::from_str(&prompt[start..end + 2])
            .map_err(|e| CompletionError::unavailable(e.to_string()))?;

        let reply = serde_json::json!({
            "top_products": [listing[0].clone()],
            "price_range": {"min": 1, "max": 2, "average": 1.5},
            "sentiment": {"overall": "Very Positive", "positive_points": ["Solid"], "negative_points": []}
        });
        Ok(format!("Sure! Here you go:\n```json\n{}\n```", reply))
    }

    fn name(&self) -> &str {
        "echo"
    }
}

fn fixture_catalog() -> Arc<FixtureCatalog> {
    Arc::new(FixtureCatalog::new().with_latency(Duration::ZERO).with_seed(5))
}

#[tokio::test]
async fn test_model_path_returns_parsed_reply() {
    let analyzer = Analyzer::new(
        fixture_catalog(),
        NarrativeAnalyzer::new(Arc::new(EchoFirstCandidate)),
    );

    let candidates = analyzer.candidates("gaming laptops", 0.0, 100000.0).await.unwrap();
    let result = analyzer
        .analyze("Amazon.in", "gaming laptops", 0.0, 100000.0)
        .await
        .unwrap();

    assert!(analyzer.has_model());
    assert_eq!(result.top_products.len(), 1);
    assert_eq!(result.top_products[0], candidates[0]);
    assert_eq!(result.sentiment.overall, Sentiment::VeryPositive);
    assert_eq!(result.price_range.average, 1.5);
}

#[tokio::test]
async fn test_heuristic_path_for_unknown_category() {
    let analyzer = Analyzer::new(fixture_catalog(), NarrativeAnalyzer::heuristic_only());

    let candidates = analyzer.candidates("yoga mats", 200.0, 2000.0).await.unwrap();
    let result = analyzer
        .analyze("Flipkart", "yoga mats", 200.0, 2000.0)
        .await
        .unwrap();

    assert!((3..=5).contains(&candidates.len()));
    assert_eq!(result, summarize(&candidates));
    assert!(result
        .top_products
        .iter()
        .all(|p| (200.0..=2000.0).contains(&p.price)));
    // every placeholder carries "Good ... for the price" and "Would recommend"
    assert_eq!(result.sentiment.overall, Sentiment::VeryPositive);
}

#[tokio::test]
async fn test_result_serializes_to_contract_shape() {
    let analyzer = Analyzer::from_settings(
        &{
            let mut settings = Settings::default();
            settings.catalog.delay_ms = 0;
            settings
        },
        None,
    );

    let result = analyzer
        .analyze("amazon", "wireless earbuds", 0.0, 5000.0)
        .await
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    let back: AnalysisResult = serde_json::from_value(json.clone()).unwrap();

    assert_eq!(back, result);
    assert!(json["top_products"].is_array());
    assert!(json["price_range"]["average"].is_number());
    assert!(json["sentiment"]["overall"].is_string());
}
