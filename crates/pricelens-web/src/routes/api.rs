//! JSON API route handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use pricelens_core::catalog::{DEFAULT_MAX_PRICE, FIXTURE_GROUPS};
use pricelens_core::AnalysisResult;

use super::status_for;
use crate::state::AppState;

fn default_platform() -> String {
    "Amazon.in".to_string()
}

fn default_max_price() -> f64 {
    DEFAULT_MAX_PRICE
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default = "default_platform")]
    pub platform: String,
    pub category: String,
    #[serde(default)]
    pub min_price: f64,
    #[serde(default = "default_max_price")]
    pub max_price: f64,
}

#[derive(Debug, Serialize)]
pub struct CatalogGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    pub products: usize,
}

/// POST /api/analyze - Run one analysis.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, (StatusCode, String)> {
    let result = state
        .analyzer
        .analyze(&req.platform, &req.category, req.min_price, req.max_price)
        .await
        .map_err(|e| (status_for(&e), e.to_string()))?;

    Ok(Json(result))
}

/// GET /api/catalog - List the built-in fixture groups.
pub async fn list_catalog() -> Json<Vec<CatalogGroup>> {
    let groups = FIXTURE_GROUPS
        .iter()
        .map(|g| CatalogGroup {
            id: g.id,
            label: g.label,
            keywords: g.keywords,
            products: g.products.len(),
        })
        .collect();

    Json(groups)
}

/// GET /api/health - Liveness plus whether a model is configured.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "model": state.analyzer.has_model(),
    }))
}
