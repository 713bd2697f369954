//! Conversion of raw extraction candidates into API product records.

use chrono::{DateTime, Utc};
use torfs_core::products::{ProductRecord, PRICE_NOT_AVAILABLE, UNKNOWN_PRODUCT};

use crate::types::RawCandidate;
use crate::SITE_ORIGIN;

/// Shapes raw candidates into the records the API serves.
///
/// Caps the list at `max_products`, assigns dense 1-based ids in extraction
/// order, fills the name/price placeholders for missing fields and resolves
/// relative product URLs against [`SITE_ORIGIN`]. Every record carries the
/// same `scraped_at` timestamp, taken once per scrape.
pub fn normalize_candidates(
    candidates: Vec<RawCandidate>,
    max_products: usize,
    scraped_at: DateTime<Utc>,
) -> Vec<ProductRecord> {
    candidates
        .into_iter()
        .take(max_products)
        .enumerate()
        .map(|(index, candidate)| {
            let name = if candidate.name.trim().is_empty() {
                UNKNOWN_PRODUCT.to_owned()
            } else {
                candidate.name
            };
            let price = candidate
                .price
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| PRICE_NOT_AVAILABLE.to_owned());
            let url = candidate.product_url.map(|u| {
                if u.starts_with("http") {
                    u
                } else if u.starts_with('/') {
                    format!("{SITE_ORIGIN}{u}")
                } else {
                    format!("{SITE_ORIGIN}/{u}")
                }
            });

            ProductRecord {
                id: u32::try_from(index + 1).unwrap_or(u32::MAX),
                name,
                price,
                image: candidate.image,
                url,
                scraped_at,
            }
        })
        .collect()
}
