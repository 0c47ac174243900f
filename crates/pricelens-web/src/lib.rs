//! PriceLens Web Server
//!
//! Axum-based server for the search form and JSON API.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/analyze", post(routes::api::analyze))
        .route("/catalog", get(routes::api::list_catalog))
        .route("/health", get(routes::api::health))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::page::index))
        .route("/analyze", post(routes::page::analyze))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use pricelens_core::catalog::FixtureCatalog;
    use pricelens_core::{Analyzer, AnalysisResult, NarrativeAnalyzer};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        let catalog = FixtureCatalog::new().with_latency(Duration::ZERO).with_seed(1);
        let analyzer = Analyzer::new(Arc::new(catalog), NarrativeAnalyzer::heuristic_only());
        create_router(AppState::new(analyzer))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("name=\"category\""));
        assert!(html.contains("Flipkart"));
        assert!(html.contains("value=\"200000\""));
    }

    #[tokio::test]
    async fn test_api_analyze_returns_result_json() {
        let response = app()
            .oneshot(json_post(
                "/api/analyze",
                serde_json::json!({
                    "platform": "Amazon.in",
                    "category": "gaming laptops",
                    "min_price": 0,
                    "max_price": 100000
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: AnalysisResult = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(result.top_products.len(), 3);
        assert!(result.top_products.iter().all(|p| p.price <= 100000.0));
    }

    #[tokio::test]
    async fn test_api_analyze_rejects_inverted_band() {
        let response = app()
            .oneshot(json_post(
                "/api/analyze",
                serde_json::json!({"category": "tv", "min_price": 5000, "max_price": 10}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("exceeds"));
    }

    #[tokio::test]
    async fn test_form_analyze_renders_results() {
        let response = app()
            .oneshot(form_post(
                "platform=Flipkart&category=smartwatch&min_price=0&max_price=100000",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Top products"));
        assert!(html.contains("Customer sentiment"));
        assert!(html.contains("Configured engine: heuristic only"));
    }

    #[tokio::test]
    async fn test_form_error_rerenders_with_400() {
        let response = app()
            .oneshot(form_post("platform=Amazon.in&category=&min_price=0&max_price=10"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_string(response).await;
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("category must not be empty"));
    }

    #[tokio::test]
    async fn test_catalog_and_health() {
        let response = app()
            .oneshot(Request::builder().uri("/api/catalog").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let groups: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(groups[0]["id"], "laptops");

        let response = app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let health: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(health, serde_json::json!({"status": "ok", "model": false}));
    }
}
