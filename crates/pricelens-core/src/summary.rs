//! Deterministic keyword summarizer.
//!
//! Produces the same `AnalysisResult` shape the model is asked for, from
//! ratings, prices and review keywords alone.

use crate::model::{AnalysisResult, PriceStats, ProductRecord, Sentiment, SentimentSummary, MAX_POINTS};

/// Number of top picks the summarizer returns.
pub const TOP_PICKS: usize = 3;

const POSITIVE_KEYWORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "love", "perfect", "best", "recommend",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad", "poor", "terrible", "disappointed", "issue", "problem", "worst", "avoid",
];

/// Summarize a candidate list. Total: an empty list gives the empty result.
pub fn summarize(products: &[ProductRecord]) -> AnalysisResult {
    AnalysisResult {
        top_products: top_rated(products, TOP_PICKS),
        price_range: PriceStats::from_prices(products.iter().map(|p| p.price)),
        sentiment: extract_sentiment(products),
    }
}

/// The `n` highest-rated products. Ties keep their input order.
pub fn top_rated(products: &[ProductRecord], n: usize) -> Vec<ProductRecord> {
    let mut sorted: Vec<&ProductRecord> = products.iter().collect();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sorted.into_iter().take(n).cloned().collect()
}

/// Collect keyword-matching reviews verbatim and classify the balance.
pub fn extract_sentiment(products: &[ProductRecord]) -> SentimentSummary {
    let mut positive_points: Vec<String> = Vec::new();
    let mut negative_points: Vec<String> = Vec::new();

    for review in products.iter().flat_map(|p| p.reviews.iter()) {
        let lower = review.to_lowercase();

        if mentions_any(&lower, POSITIVE_KEYWORDS) && !positive_points.contains(review) {
            positive_points.push(review.clone());
        }
        if mentions_any(&lower, NEGATIVE_KEYWORDS) && !negative_points.contains(review) {
            negative_points.push(review.clone());
        }
    }

    positive_points.truncate(MAX_POINTS);
    negative_points.truncate(MAX_POINTS);

    SentimentSummary {
        overall: Sentiment::from_counts(positive_points.len(), negative_points.len()),
        positive_points,
        negative_points,
    }
}

fn mentions_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text_lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(name: &str, price: f64, rating: f64, reviews: &[&str]) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            price,
            features: vec!["Feature".to_string()],
            rating,
            reviews: reviews.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_input() {
        let result = summarize(&[]);
        assert!(result.top_products.is_empty());
        assert_eq!(result.price_range, PriceStats { min: 0.0, max: 0.0, average: 0.0 });
        assert_eq!(result.sentiment.overall, Sentiment::Mixed);
        assert!(result.sentiment.positive_points.is_empty());
        assert!(result.sentiment.negative_points.is_empty());
    }

    #[test]
    fn test_top_rated_is_stable_on_ties() {
        let products = vec![
            product("a", 10.0, 4.0, &[]),
            product("b", 20.0, 4.5, &[]),
            product("c", 30.0, 4.0, &[]),
            product("d", 40.0, 4.5, &[]),
        ];
        let names: Vec<String> = top_rated(&products, 3).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["b", "d", "a"]);
    }

    #[test]
    fn test_price_range_covers_all_candidates() {
        let products = vec![
            product("a", 100.0, 5.0, &[]),
            product("b", 300.0, 4.9, &[]),
            product("c", 200.0, 4.8, &[]),
            product("d", 50.0, 1.0, &[]),
        ];
        let result = summarize(&products);
        assert_eq!(result.top_products.len(), 3);
        assert_eq!(result.price_range.min, 50.0);
        assert_eq!(result.price_range.max, 300.0);
        assert_eq!(result.price_range.average, 162.5);
    }

    #[test]
    fn test_three_positive_reviews_is_very_positive() {
        let products = vec![product(
            "a",
            1.0,
            4.0,
            &["Great sound", "Excellent battery", "Love the fit", "Decent case"],
        )];
        let sentiment = extract_sentiment(&products);
        assert_eq!(sentiment.positive_points, vec!["Great sound", "Excellent battery", "Love the fit"]);
        assert!(sentiment.negative_points.is_empty());
        assert_eq!(sentiment.overall, Sentiment::VeryPositive);
    }

    #[test]
    fn test_points_are_verbatim_deduplicated_and_capped() {
        let products = vec![
            product("a", 1.0, 4.0, &["Poor grip", "GOOD value", "Terrible app"]),
            product("b", 1.0, 4.0, &["GOOD value", "Bad hinge", "Worst speaker", "Avoid it"]),
        ];
        let sentiment = extract_sentiment(&products);
        assert_eq!(sentiment.positive_points, vec!["GOOD value"]);
        assert_eq!(sentiment.negative_points, vec!["Poor grip", "Terrible app", "Bad hinge"]);
        assert_eq!(sentiment.overall, Sentiment::VeryNegative);
    }

    #[test]
    fn test_review_can_count_on_both_sides() {
        let products = vec![product("a", 1.0, 4.0, &["Good screen but one issue"])];
        let sentiment = extract_sentiment(&products);
        assert_eq!(sentiment.positive_points.len(), 1);
        assert_eq!(sentiment.negative_points.len(), 1);
        assert_eq!(sentiment.overall, Sentiment::Mixed);
    }

    #[test]
    fn test_summary_is_deterministic_and_in_shape() {
        let products = vec![
            product("a", 10.0, 4.2, &["Great value", "Battery issue"]),
            product("b", 15.0, 4.8, &["Best in class"]),
        ];
        let first = summarize(&products);
        let second = summarize(&products);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert!(first.check_shape(products.len()).is_ok());
    }

    fn arb_products() -> impl Strategy<Value = Vec<ProductRecord>> {
        prop::collection::vec((0.0f64..200_000.0, 0.0f64..=5.0), 1..20).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (price, rating))| product(&format!("p{}", i), price, rating, &[]))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_price_range_bounds(products in arb_products()) {
            let stats = summarize(&products).price_range;
            let true_min = products.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
            let true_max = products.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max);

            prop_assert_eq!(stats.min, true_min);
            prop_assert_eq!(stats.max, true_max);
            prop_assert!(stats.min <= stats.average && stats.average <= stats.max);
        }

        #[test]
        fn prop_top_picks_bounded_and_sorted(products in arb_products()) {
            let top = summarize(&products).top_products;
            prop_assert_eq!(top.len(), TOP_PICKS.min(products.len()));
            prop_assert!(top.windows(2).all(|w| w[0].rating >= w[1].rating));
        }
    }
}
