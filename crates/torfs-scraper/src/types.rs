//! Intermediate extraction types.

/// An unvalidated product tuple produced by one extraction strategy.
///
/// Candidates are transient: they live for a single scrape invocation and are
/// converted into [`torfs_core::ProductRecord`]s by [`crate::normalize`].
/// `price`, `image` and `product_url` stay optional here; defaulting and URL
/// resolution happen at normalization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    pub name: String,
    pub price: Option<String>,
    pub image: Option<String>,
    pub product_url: Option<String>,
}
