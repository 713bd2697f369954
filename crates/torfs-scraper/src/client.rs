//! HTTP client for the retailer's product listing page.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// HTTP client for fetching the raw listing HTML.
///
/// Sends browser-like headers: Torfs serves a stripped page to clients that
/// look like bots. Non-2xx responses become [`ScraperError::UnexpectedStatus`]
/// so the caller can decide whether the sample catalogue applies.
pub struct ListingClient {
    client: Client,
    listing_url: String,
}

impl ListingClient {
    /// Creates a `ListingClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidListingUrl`] if `listing_url` is not an
    /// absolute URL, or [`ScraperError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        listing_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        reqwest::Url::parse(listing_url).map_err(|e| ScraperError::InvalidListingUrl {
            url: listing_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            listing_url: listing_url.to_owned(),
        })
    }

    #[must_use]
    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    /// Fetches the raw HTML of the listing page.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ScraperError::Http`] for network, TLS or body-read failures.
    pub async fn fetch_listing(&self) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(&self.listing_url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.listing_url.clone(),
            });
        }

        Ok(response.text().await?)
    }
}
