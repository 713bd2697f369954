//! Price extraction from an element subtree.
//!
//! Selector lists are ordered most-specific first and evaluated
//! top-to-bottom with first-match-wins semantics. The Torfs-specific list
//! targets the schema.org markup observed on the live listing page
//! (`span.value[itemprop="price"]` with the machine-readable price in a
//! `content` attribute); the generic list covers common e-commerce naming.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

/// Torfs-specific price selectors. The `content` attribute, when present, is
/// preferred over visible text because it carries the unformatted decimal.
const SITE_PRICE_SELECTORS: [&str; 5] = [
    r#"span.value[itemprop="price"]"#,
    "span.value",
    r#".value[itemprop="price"]"#,
    r#"[itemprop="price"]"#,
    "span[content]",
];

/// Generic price selectors covering common e-commerce class conventions.
const GENERIC_PRICE_SELECTORS: [&str; 16] = [
    ".price",
    ".product-price",
    ".current-price",
    ".price-current",
    "[data-price]",
    ".price-box",
    ".price-value",
    ".amount",
    ".cost",
    ".tariff",
    ".fee",
    ".rate",
    r#"[class*="price"]"#,
    r#"[class*="amount"]"#,
    r#"[class*="cost"]"#,
    ".pricing",
];

static SITE_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    SITE_PRICE_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("valid price selector"))
        .collect()
});

static GENERIC_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    GENERIC_PRICE_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("valid price selector"))
        .collect()
});

static DATA_PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[data-price]").expect("valid price selector"));

/// Price patterns tried in order; the first pattern with a match wins and
/// its first match is returned. The bare `digits.digits` pattern is a last
/// resort and deliberately ordered after every currency-marked form.
static PRICE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"€\s*\d+[.,]\d{2}",         // €99.99 or € 99,99
        r"\d+[.,]\d{2}\s*€",         // 99.99€ or 99,99 €
        r"(?i)EUR\s*\d+[.,]\d{2}",   // EUR 99.99
        r"(?i)\d+[.,]\d{2}\s*EUR",   // 99.99 EUR
        r"\$\s*\d+[.,]\d{2}",        // $99.99
        r"£\s*\d+[.,]\d{2}",         // £99.99
        r"\d+[.,]\d{2}",             // bare decimal, last resort
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid price regex"))
    .collect()
});

/// Formats a machine-readable `content` attribute value (`"49.99"`) the way
/// the storefront displays prices (`"€ 49,99"`).
pub(crate) fn format_content_price(content: &str) -> String {
    format!("€ {}", content.replace('.', ","))
}

/// Extracts a normalized price string from `scope`'s descendants, or `None`.
///
/// Cascade: site-specific selectors (attribute value preferred over text),
/// generic selectors run through [`match_price_text`], a raw `data-price`
/// attribute, and finally the regex matcher over the subtree's full text.
pub(crate) fn extract_price(scope: ElementRef<'_>) -> Option<String> {
    for selector in SITE_SELECTORS.iter() {
        if let Some(element) = scope.select(selector).next() {
            // An empty content attribute counts as absent.
            if let Some(content) = element.value().attr("content").filter(|c| !c.is_empty()) {
                return Some(format_content_price(content));
            }
            let text = element.text().collect::<String>();
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_owned());
            }
        }
    }

    for selector in GENERIC_SELECTORS.iter() {
        if let Some(element) = scope.select(selector).next() {
            let text = element.text().collect::<String>();
            if let Some(price) = match_price_text(&text) {
                return Some(price);
            }
        }
    }

    if let Some(raw) = scope
        .select(&DATA_PRICE)
        .next()
        .and_then(|el| el.value().attr("data-price"))
    {
        return Some(raw.to_owned());
    }

    let full_text = scope.text().collect::<String>();
    match_price_text(&full_text)
}

/// Applies the ordered price pattern list to a text blob and returns the
/// first pattern's first match, trimmed.
pub(crate) fn match_price_text(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    PRICE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text).map(|m| m.as_str().trim().to_owned()))
}
