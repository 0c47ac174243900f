//! Placeholder listings for categories with no fixture group.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::ProductRecord;

/// Feature templates by product type, matched in order.
///
/// No "accessories" entry: any category containing "ac" is claimed by the
/// air-conditioner fixture group before it reaches this table.
const FEATURE_TEMPLATES: &[(&str, [&str; 5])] = &[
    ("kitchen", ["Durable construction", "Easy to clean", "Ergonomic design", "Heat resistant", "Space saving"]),
    ("furniture", ["Sturdy build", "Modern design", "Easy assembly", "Space efficient", "Durable material"]),
    ("clothing", ["Comfortable fit", "Durable fabric", "Easy to wash", "Stylish design", "Breathable material"]),
    ("shoes", ["Comfortable fit", "Durable sole", "Breathable material", "Stylish design", "Good grip"]),
    ("electronics", ["Energy efficient", "User-friendly interface", "Durable build", "Good performance", "Value for money"]),
    ("beauty", ["Natural ingredients", "Effective results", "Suitable for all skin types", "Long-lasting", "Pleasant fragrance"]),
    ("sports", ["Durable construction", "Comfortable fit", "Good performance", "Lightweight", "Easy to maintain"]),
    ("books", ["Well-written", "Engaging content", "Good print quality", "Durable binding", "Value for money"]),
    ("toys", ["Safe materials", "Educational value", "Durable construction", "Age appropriate", "Fun to play with"]),
];

const DEFAULT_PRODUCT_TYPE: &str = "electronics";

const MIN_GENERATED: usize = 3;
const MAX_GENERATED: usize = 5;
const FEATURES_PER_PRODUCT: usize = 3;
const MIN_RATING: f64 = 3.5;
const MAX_RATING: f64 = 5.0;

/// Guess a product type from the category, defaulting to electronics.
pub fn product_type(category: &str) -> &'static str {
    let lower = category.to_lowercase();
    FEATURE_TEMPLATES
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(key, _)| *key)
        .unwrap_or(DEFAULT_PRODUCT_TYPE)
}

fn features_for(product_type: &str) -> &'static [&'static str] {
    FEATURE_TEMPLATES
        .iter()
        .find(|(key, _)| *key == product_type)
        .or_else(|| FEATURE_TEMPLATES.iter().find(|(key, _)| *key == DEFAULT_PRODUCT_TYPE))
        .map(|(_, features)| &features[..])
        .unwrap_or(&[])
}

/// Synthesize 3 to 5 listings priced inside `[min_price, max_price]`.
pub fn generate<R: Rng>(
    category: &str,
    min_price: f64,
    max_price: f64,
    rng: &mut R,
) -> Vec<ProductRecord> {
    let category = category.trim();
    let features = features_for(product_type(category));
    let title = title_case(category);
    let count = rng.gen_range(MIN_GENERATED..=MAX_GENERATED);

    (1..=count)
        .map(|i| {
            let price = draw_price(min_price, max_price, rng);
            let rating = (rng.gen_range(MIN_RATING..=MAX_RATING) * 10.0).round() / 10.0;
            let picked = features
                .choose_multiple(&mut *rng, FEATURES_PER_PRODUCT)
                .map(|s| s.to_string())
                .collect();

            ProductRecord {
                name: format!("{} {}", title, i),
                price,
                features: picked,
                rating,
                reviews: vec![
                    format!("Good {} for the price", category),
                    "Works well for my needs".to_string(),
                    "Could be better in some aspects".to_string(),
                    "Overall satisfied with the purchase".to_string(),
                    "Would recommend to others".to_string(),
                ],
            }
        })
        .collect()
}

/// Whole-rupee price inside the band. Scales a unit draw so bands up to
/// `f64::MAX` wide stay representable.
fn draw_price<R: Rng>(min_price: f64, max_price: f64, rng: &mut R) -> f64 {
    let unit: f64 = rng.gen();
    (min_price + unit * (max_price - min_price))
        .round()
        .clamp(min_price, max_price)
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
