//! Prompt construction for the model-backed path.

use crate::error::PriceLensResult;
use crate::model::ProductRecord;

/// Analysis prompt. `{products}` is replaced with the pretty-printed
/// candidate list.
const ANALYSIS_PROMPT: &str = r##"You are an e-commerce product analyst. Analyze the following product listings and report insights in the exact format specified below.

Products:
{products}

Based on these products, provide:

1. The top 3-5 products with their key features
2. Price range analysis (min, max, average) over ALL listed products
3. Overall customer sentiment and common points from the reviews

Return ONLY a valid JSON object (no markdown, no explanation) matching this exact structure:

{
  "top_products": [
    {
      "name": "Product Name",
      "price": 49999,
      "features": ["Feature 1", "Feature 2", "Feature 3"],
      "rating": 4.5,
      "reviews": ["Review 1", "Review 2", "Review 3"]
    }
  ],
  "price_range": {
    "min": 19999,
    "max": 69999,
    "average": 44999
  },
  "sentiment": {
    "overall": "Positive",
    "positive_points": ["Point 1", "Point 2"],
    "negative_points": ["Point 1", "Point 2"]
  }
}

Instructions:
- Only pick products from the list above, copying their fields unchanged
- "overall" must be one of: "Very Positive", "Positive", "Mixed", "Negative", "Very Negative"
- Give at most 3 positive points and at most 3 negative points
- Return ONLY the JSON object, nothing else"##;

/// Build the analysis prompt for a candidate list.
pub fn build_prompt(products: &[ProductRecord]) -> PriceLensResult<String> {
    let listing = serde_json::to_string_pretty(products)?;
    Ok(ANALYSIS_PROMPT.replace("{products}", &listing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_every_candidate() {
        let products = vec![
            ProductRecord {
                name: "Alpha Watch".to_string(),
                price: 2999.0,
                features: vec!["AMOLED".to_string()],
                rating: 4.1,
                reviews: vec!["Great strap".to_string()],
            },
            ProductRecord {
                name: "Beta Watch".to_string(),
                price: 4999.0,
                features: Vec::new(),
                rating: 3.9,
                reviews: Vec::new(),
            },
        ];

        let prompt = build_prompt(&products).unwrap();
        assert!(prompt.contains("\"name\": \"Alpha Watch\""));
        assert!(prompt.contains("\"name\": \"Beta Watch\""));
        assert!(prompt.contains("\"positive_points\""));
        assert!(prompt.contains("Return ONLY the JSON object"));
        assert!(!prompt.contains("{products}"));
    }
}
