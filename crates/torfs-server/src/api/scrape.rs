use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use super::{AppState, ScrapeFailure, ScrapeResponse};

/// `GET /api/scrape`: scrapes the configured listing page on demand.
///
/// Recoverable upstream failures are already downgraded to the sample
/// catalogue inside the scraper, so this handler only reports `success:
/// false` for hard transport errors such as timeouts.
pub(super) async fn scrape_listing(State(state): State<AppState>) -> impl IntoResponse {
    match torfs_scraper::scrape_products(&state.client, state.max_products).await {
        Ok(products) => (
            StatusCode::OK,
            Json(ScrapeResponse {
                success: true,
                count: products.len(),
                products,
                scraped_at: Utc::now(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "scrape failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ScrapeFailure {
                    success: false,
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
