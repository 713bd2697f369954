use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid listing URL \"{url}\": {reason}")]
    InvalidListingUrl { url: String, reason: String },
}

impl ScraperError {
    /// Whether the failure should be recovered with the sample catalogue
    /// instead of surfacing to the caller.
    ///
    /// Recoverable: connection refused / DNS failure and any HTTP status
    /// >= 400 (the retailer blocking us is an expected condition). Timeouts,
    /// body-read failures and config errors propagate.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect(),
            Self::UnexpectedStatus { status, .. } => *status >= 400,
            Self::InvalidListingUrl { .. } => false,
        }
    }
}
