pub mod client;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod normalize;
mod scrape;
pub mod types;

pub use client::ListingClient;
pub use error::ScraperError;
pub use scrape::{extract_listing, scrape_products};
pub use types::RawCandidate;

/// Origin used to absolutize root-relative product and image URLs.
pub const SITE_ORIGIN: &str = "https://www.torfs.be";
