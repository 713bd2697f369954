//! The externally visible product entity returned by the scrape API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel price used when no price could be extracted for a candidate.
pub const PRICE_NOT_AVAILABLE: &str = "Price not available";

/// Sentinel name used when a candidate somehow reaches normalization without one.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// A fully normalized product as served by `GET /api/scrape`.
///
/// Every field is populated at normalization time: `price` is never empty
/// (the sentinel stands in for missing prices) and `image`/`url`, when
/// present, are absolute (`http…` or `//…`). Serialized in camelCase to match
/// the front-end contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Dense 1-based position within one scrape result.
    pub id: u32,
    pub name: String,
    pub price: String,
    pub image: Option<String>,
    pub url: Option<String>,
    pub scraped_at: DateTime<Utc>,
}
