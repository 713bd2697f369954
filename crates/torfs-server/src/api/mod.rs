mod scrape;

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::middleware::request_id;
use torfs_core::products::ProductRecord;
use torfs_scraper::ListingClient;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ListingClient>,
    pub max_products: usize,
}

/// Envelope returned by `GET /api/scrape` on success. The sample catalogue
/// travels in the same shape, so clients never need to distinguish the two.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResponse {
    pub success: bool,
    pub count: usize,
    pub products: Vec<ProductRecord>,
    pub scraped_at: DateTime<Utc>,
}

/// Envelope returned by `GET /api/scrape` when the scrape fails outright.
#[derive(Debug, Serialize)]
pub struct ScrapeFailure {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

/// Assembles the full application router: the JSON API plus the static
/// front-end served from `public_dir` (its `index.html` answers `/`).
pub fn build_app(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/api/scrape", get(scrape::scrape_listing))
        .route("/api/health", get(health))
        .fallback_service(ServeDir::new(public_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
    })
}
