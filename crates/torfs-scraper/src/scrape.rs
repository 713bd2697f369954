//! Scrape orchestration: fetch, extract, normalize, recover.

use chrono::{DateTime, Utc};
use scraper::Html;
use torfs_core::products::ProductRecord;

use crate::client::ListingClient;
use crate::error::ScraperError;
use crate::extract::extract_candidates;
use crate::fallback::sample_products;
use crate::normalize::normalize_candidates;

/// Parses listing HTML and produces normalized product records.
///
/// Synchronous on purpose: the parsed document is not `Send`, so all DOM
/// work happens here before control returns to an async caller.
#[must_use]
pub fn extract_listing(
    html: &str,
    max_products: usize,
    scraped_at: DateTime<Utc>,
) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);
    let extraction = extract_candidates(&document);
    tracing::info!(
        candidates = extraction.candidates.len(),
        strategy = ?extraction.strategy,
        "listing extraction finished"
    );
    normalize_candidates(extraction.candidates, max_products, scraped_at)
}

/// Fetches the listing page and extracts up to `max_products` records.
///
/// Recoverable failures (connection refused, DNS failure, any HTTP status
/// >= 400) are downgraded to the sample catalogue so the API keeps serving
/// data when the retailer blocks us. Anything else propagates.
///
/// # Errors
///
/// Returns [`ScraperError`] for non-recoverable transport failures such as
/// timeouts or body-read errors.
pub async fn scrape_products(
    client: &ListingClient,
    max_products: usize,
) -> Result<Vec<ProductRecord>, ScraperError> {
    tracing::info!(url = client.listing_url(), "fetching product listing");

    match client.fetch_listing().await {
        Ok(html) => Ok(extract_listing(&html, max_products, Utc::now())),
        Err(err) if err.is_recoverable() => {
            tracing::warn!(error = %err, "listing unreachable, serving sample catalogue");
            Ok(sample_products(Utc::now()))
        }
        Err(err) => Err(err),
    }
}
