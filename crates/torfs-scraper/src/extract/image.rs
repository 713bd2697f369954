//! Image URL extraction and resolution.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::SITE_ORIGIN;

/// Image-bearing selectors, direct `src` first, lazy-load variants next,
/// nested containers last.
const IMAGE_SELECTORS: [&str; 9] = [
    "img[src]",
    "img[data-src]",
    "img[data-lazy]",
    "img[data-original]",
    "img[data-lazyload]",
    "[data-background-image]",
    ".image img",
    ".product-image img",
    ".thumbnail img",
];

/// Attributes tried on each matched element, in order.
const IMAGE_ATTRIBUTES: [&str; 5] = ["src", "data-src", "data-lazy", "data-original", "data-lazyload"];

static IMG_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    IMAGE_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("valid image selector"))
        .collect()
});

static BACKGROUND_IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[data-background-image]").expect("valid image selector"));

/// Extracts an absolute image URL from `scope`'s descendants, or `None`.
///
/// Values containing a placeholder/loading marker are rejected so lazy-load
/// stand-ins never leak into results. Relative forms are resolved against
/// [`SITE_ORIGIN`]; bare relative paths (no leading slash) are skipped as
/// they are never real product shots on this site.
pub(crate) fn extract_image_url(scope: ElementRef<'_>) -> Option<String> {
    for selector in IMG_SELECTORS.iter() {
        if let Some(element) = scope.select(selector).next() {
            for attr in IMAGE_ATTRIBUTES {
                if let Some(value) = element.value().attr(attr) {
                    let value = value.trim();
                    if value.is_empty()
                        || value.contains("placeholder")
                        || value.contains("loading")
                    {
                        continue;
                    }
                    if let Some(resolved) = resolve_image_url(value) {
                        return Some(resolved);
                    }
                }
            }
        }
    }

    // Background-image data attribute as last resort.
    scope
        .select(&BACKGROUND_IMAGE)
        .next()
        .and_then(|el| el.value().attr("data-background-image"))
        .map(|value| {
            if value.starts_with("http") {
                value.to_owned()
            } else {
                format!("{SITE_ORIGIN}{value}")
            }
        })
}

/// Resolves the relative URL forms seen in listing markup. Returns `None`
/// for bare relative paths.
fn resolve_image_url(value: &str) -> Option<String> {
    if let Some(rest) = value.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if value.starts_with('/') {
        return Some(format!("{SITE_ORIGIN}{value}"));
    }
    if value.starts_with("http") {
        return Some(value.to_owned());
    }
    None
}
