//! Server-rendered search form and result page.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use pricelens_core::catalog::DEFAULT_MAX_PRICE;
use pricelens_core::format::{format_amount, format_rating, format_rupees};
use pricelens_core::{AnalysisResult, Platform, PriceLensError, PriceLensResult, ProductRecord};

use super::status_for;
use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    form: FormView,
}

#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate {
    form: FormView,
    engine: String,
    products: Vec<ProductView>,
    price_min: String,
    price_max: String,
    price_average: String,
    overall: String,
    positive_points: Vec<String>,
    negative_points: Vec<String>,
}

/// View model for the search form, echoing what was submitted.
struct FormView {
    platforms: Vec<PlatformOption>,
    category: String,
    min_price: String,
    max_price: String,
    error: String,
}

struct PlatformOption {
    name: &'static str,
    selected: bool,
}

/// View model for a product card.
struct ProductView {
    name: String,
    price: String,
    rating: String,
    features: Vec<String>,
}

impl FormView {
    fn new(platform: &str, category: &str, min_price: &str, max_price: &str) -> Self {
        let chosen = platform.parse::<Platform>().unwrap_or(Platform::AmazonIn);
        Self {
            platforms: Platform::ALL
                .iter()
                .map(|p| PlatformOption {
                    name: p.as_str(),
                    selected: *p == chosen,
                })
                .collect(),
            category: category.to_string(),
            min_price: min_price.to_string(),
            max_price: max_price.to_string(),
            error: String::new(),
        }
    }

    fn blank() -> Self {
        Self::new(
            Platform::AmazonIn.as_str(),
            "",
            "0",
            &DEFAULT_MAX_PRICE.to_string(),
        )
    }

    fn with_error(mut self, error: String) -> Self {
        self.error = error;
        self
    }
}

impl ProductView {
    fn from_record(product: &ProductRecord) -> Self {
        Self {
            name: product.name.clone(),
            price: format_rupees(product.price),
            rating: format_rating(product.rating),
            features: product.features.clone(),
        }
    }
}

impl ResultTemplate {
    fn new(form: FormView, engine: String, result: &AnalysisResult) -> Self {
        Self {
            form,
            engine,
            products: result.top_products.iter().map(ProductView::from_record).collect(),
            price_min: format_rupees(result.price_range.min),
            price_max: format_rupees(result.price_range.max),
            price_average: format!("₹{}", format_amount(result.price_range.average, 2)),
            overall: result.sentiment.overall.to_string(),
            positive_points: result.sentiment.positive_points.clone(),
            negative_points: result.sentiment.negative_points.clone(),
        }
    }
}

fn render<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("Template error: {}", e)),
        )
            .into_response(),
    }
}

// ============================================================
// HANDLERS
// ============================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub min_price: String,
    #[serde(default)]
    pub max_price: String,
}

fn parse_price(field: &str, raw: &str, default: f64) -> PriceLensResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.replace(',', "")
        .parse()
        .map_err(|_| PriceLensError::invalid_input(format!("{} '{}' is not a number", field, raw)))
}

async fn run_form(state: &AppState, input: &AnalyzeForm) -> PriceLensResult<AnalysisResult> {
    let min_price = parse_price("minimum price", &input.min_price, 0.0)?;
    let max_price = parse_price("maximum price", &input.max_price, DEFAULT_MAX_PRICE)?;
    state
        .analyzer
        .analyze(&input.platform, &input.category, min_price, max_price)
        .await
}

/// GET / - Serve the search form.
pub async fn index() -> Response {
    render(&IndexTemplate { form: FormView::blank() }, StatusCode::OK)
}

/// POST /analyze - Run an analysis and render the result page.
pub async fn analyze(State(state): State<AppState>, Form(input): Form<AnalyzeForm>) -> Response {
    let form = FormView::new(&input.platform, &input.category, &input.min_price, &input.max_price);

    match run_form(&state, &input).await {
        Ok(result) => render(
            &ResultTemplate::new(form, state.analyzer.engine_label(), &result),
            StatusCode::OK,
        ),
        Err(e) => {
            let status = status_for(&e);
            render(&IndexTemplate { form: form.with_error(e.to_string()) }, status)
        }
    }
}
