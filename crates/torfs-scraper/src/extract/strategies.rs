//! The individual extraction passes run by the cascade in [`super`].
//!
//! Each scan makes one structural assumption about the listing markup and
//! returns whatever candidates that assumption yields. Length bounds,
//! keyword lists and caps below are heuristic tuning, not hard contracts.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::extract::image::extract_image_url;
use crate::extract::navigation::is_navigation_item;
use crate::extract::price::{extract_price, format_content_price, match_price_text};
use crate::types::RawCandidate;

/// Content-block scan keeps blocks whose text length is strictly inside
/// these bounds.
const CONTENT_BLOCK_MIN_CHARS: usize = 10;
const CONTENT_BLOCK_MAX_CHARS: usize = 300;
/// Candidate names longer than this are rejected by the content-block scan.
const CONTENT_BLOCK_MAX_NAME_CHARS: usize = 100;

/// Keyword scan text-length window (inclusive).
const KEYWORD_SCAN_MIN_CHARS: usize = 5;
const KEYWORD_SCAN_MAX_CHARS: usize = 150;
/// Keyword scan result cap; the broad `*` selector would otherwise flood the
/// result with page chrome.
const KEYWORD_SCAN_CAP: usize = 20;
/// Names at or beyond this length are cut to 77 chars plus an ellipsis.
const NAME_ELLIPSIS_AT: usize = 80;

/// Body scan text-length window (inclusive).
const BODY_SCAN_MIN_CHARS: usize = 5;
const BODY_SCAN_MAX_CHARS: usize = 120;

/// Footwear-domain keywords accepted by the body scan in place of a price.
const FOOTWEAR_KEYWORDS: [&str; 12] = [
    "schoen", "schoenen", "shoe", "shoes", "sneaker", "boot", "sandal", "pump", "loafer",
    "trainer", "heel", "flat",
];

/// Block-level tags considered product containers when walking up from a
/// price anchor.
const CONTAINER_TAGS: [&str; 4] = ["div", "article", "section", "li"];
const CONTAINER_CLASSES: [&str; 2] = ["product-item", "item"];

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid strategy selector")
}

static PRICE_ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"span.value[itemprop="price"], [itemprop="price"]"#));
static ANCHOR_NAME: LazyLock<Selector> = LazyLock::new(|| {
    selector(r#"h1, h2, h3, h4, h5, .name, .title, [itemprop="name"], a[href*="/product/"]"#)
});
static ANY_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static PRODUCT_CONTAINERS: LazyLock<Selector> = LazyLock::new(|| {
    selector(
        r#"[itemtype*="schema.org"], [itemscope], .product-item, .product-card, .product, [data-product], .item, .listing-item"#,
    )
});
static CONTAINER_NAME: LazyLock<Selector> = LazyLock::new(|| {
    selector(
        r#".product-name, .product-title, .name, h3, h4, .title, [data-product-name], [itemprop="name"]"#,
    )
});
static PRODUCT_LINK: LazyLock<Selector> = LazyLock::new(|| selector(r#"a[href*="/product/"]"#));
static SCHOENEN_LINK: LazyLock<Selector> = LazyLock::new(|| selector(r#"a[href*="/schoenen/"]"#));
static NEARBY_NAME: LazyLock<Selector> = LazyLock::new(|| selector("h3, h4, .title, .name"));
static CONTENT_BLOCKS: LazyLock<Selector> = LazyLock::new(|| selector("div, article, section, li"));
static HEADINGS: LazyLock<Selector> =
    LazyLock::new(|| selector("h1, h2, h3, h4, h5, h6, .title, .name, .product-name"));
static EVERYTHING: LazyLock<Selector> = LazyLock::new(|| selector("*"));
static BODY_ELEMENTS: LazyLock<Selector> = LazyLock::new(|| selector("body *"));

static BARE_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[.,]\d{2}").expect("valid price regex"));
static PURE_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid numeric regex"));
static KEYWORD_SCAN_BLOCKLIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(Home|Menu|Search|Login|Register|Cart|Checkout|Contact)$")
        .expect("valid blocklist regex")
});
static BODY_SCAN_BLOCKLIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(Home|Menu|Search|Login|Register|Cart|Checkout|About|Contact|Help|Support)$")
        .expect("valid blocklist regex")
});

/// Strategy 0: anchor on schema.org price markers and walk up to the nearest
/// block-level container for the name, image and link.
pub(super) fn scan_price_anchors(document: &Html) -> Vec<RawCandidate> {
    let mut found = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for price_el in document.select(&PRICE_ANCHORS) {
        let Some(container) = closest_container(price_el) else {
            continue;
        };

        // The content attribute carries the machine-readable decimal; an
        // empty one counts as absent.
        let price = match price_el.value().attr("content").filter(|c| !c.is_empty()) {
            Some(content) => format_content_price(content),
            None => full_text(price_el),
        };
        if price.is_empty() {
            continue;
        }

        let name = first_text(container, &ANCHOR_NAME)
            .or_else(|| first_text(container, &ANY_LINK))
            .unwrap_or_default();
        let product_url = first_href(container, &ANY_LINK);

        if name.chars().count() <= 2
            || seen.contains(&name)
            || is_navigation_item(&name, product_url.as_deref())
        {
            continue;
        }

        let image = extract_image_url(container);
        seen.insert(name.clone());
        found.push(RawCandidate {
            name,
            price: Some(price),
            image,
            product_url,
        });
    }

    found
}

/// Strategy 1: match product-card-like containers (schema scopes, common
/// product class names, data-product attributes) and extract per container.
pub(super) fn scan_product_containers(document: &Html) -> Vec<RawCandidate> {
    let mut found = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for element in document.select(&PRODUCT_CONTAINERS) {
        let name = first_text(element, &CONTAINER_NAME)
            .or_else(|| first_text(element, &PRODUCT_LINK))
            .or_else(|| first_text(element, &SCHOENEN_LINK))
            .unwrap_or_default();
        if name.chars().count() <= 2 || seen.contains(&name) {
            continue;
        }

        let product_url = first_href(element, &ANY_LINK);
        if is_navigation_item(&name, product_url.as_deref()) {
            continue;
        }

        seen.insert(name.clone());
        found.push(RawCandidate {
            name,
            price: extract_price(element),
            image: extract_image_url(element),
            product_url,
        });
    }

    found
}

/// Strategy 2: anchor on product links and inspect the anchor, its parent
/// and grandparent for the remaining fields.
pub(super) fn scan_product_links(document: &Html) -> Vec<RawCandidate> {
    let mut found = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for anchor in document.select(&PRODUCT_LINK) {
        let href = anchor.value().attr("href").map(str::to_owned);
        let parent = anchor.parent().and_then(ElementRef::wrap);
        let grandparent = parent.and_then(|p| p.parent().and_then(ElementRef::wrap));

        let name = non_empty(full_text(anchor))
            .or_else(|| parent.and_then(|p| first_text(p, &NEARBY_NAME)))
            .or_else(|| grandparent.and_then(|g| first_text(g, &NEARBY_NAME)))
            .unwrap_or_default();

        if name.chars().count() <= 3
            || seen.contains(&name)
            || is_navigation_item(&name, href.as_deref())
        {
            continue;
        }

        let price = parent
            .and_then(extract_price)
            .or_else(|| grandparent.and_then(extract_price))
            .or_else(|| extract_price(anchor));
        let image = extract_image_url(anchor)
            .or_else(|| parent.and_then(extract_image_url))
            .or_else(|| grandparent.and_then(extract_image_url));

        seen.insert(name.clone());
        found.push(RawCandidate {
            name,
            price,
            image,
            product_url: href,
        });
    }

    found
}

/// Strategy 3: scan block-level elements for product-shaped content, that
/// is, a bounded amount of text mentioning a currency or price-shaped
/// number.
pub(super) fn scan_content_blocks(document: &Html) -> Vec<RawCandidate> {
    let mut found = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for element in document.select(&CONTENT_BLOCKS) {
        let text = full_text(element);
        let len = text.chars().count();
        if len <= CONTENT_BLOCK_MIN_CHARS || len >= CONTENT_BLOCK_MAX_CHARS {
            continue;
        }
        if !looks_priced(&text) {
            continue;
        }

        let name = first_text(element, &HEADINGS).unwrap_or_else(|| own_text_first_line(element));
        let name_len = name.chars().count();
        if name_len <= 2 || name_len >= CONTENT_BLOCK_MAX_NAME_CHARS || seen.contains(&name) {
            continue;
        }

        let product_url = first_href(element, &ANY_LINK);
        if is_navigation_item(&name, product_url.as_deref()) {
            continue;
        }

        let price = extract_price(element).or_else(|| match_price_text(&text));
        let image = extract_image_url(element);

        seen.insert(name.clone());
        found.push(RawCandidate {
            name,
            price,
            image,
            product_url,
        });
    }

    found
}

/// Strategy 4: broad scan over every element for short price-bearing text.
/// Produces name/price-only candidates; image and URL stay unset.
pub(super) fn scan_keyword_prices(document: &Html) -> Vec<RawCandidate> {
    let mut found = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for element in document.select(&EVERYTHING) {
        if found.len() >= KEYWORD_SCAN_CAP {
            break;
        }

        let text = full_text(element);
        let len = text.chars().count();
        if len < KEYWORD_SCAN_MIN_CHARS || len > KEYWORD_SCAN_MAX_CHARS {
            continue;
        }
        if KEYWORD_SCAN_BLOCKLIST.is_match(&text) {
            continue;
        }

        // A footwear keyword alone is not enough here: a matched price is
        // required either way.
        let Some(price) = match_price_text(&text) else {
            continue;
        };

        let name = truncate_name(&text);
        if seen.contains(&name) || is_navigation_item(&name, None) {
            continue;
        }

        seen.insert(name.clone());
        found.push(RawCandidate {
            name,
            price: Some(price),
            image: None,
            product_url: None,
        });
    }

    found
}

/// Unconditional fallback when every strategy came up empty: scan all body
/// elements for short text carrying a footwear keyword or a price match.
pub(super) fn scan_body_text(document: &Html) -> Vec<RawCandidate> {
    let mut found = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for element in document.select(&BODY_ELEMENTS) {
        let text = full_text(element);
        let len = text.chars().count();
        if len < BODY_SCAN_MIN_CHARS || len > BODY_SCAN_MAX_CHARS {
            continue;
        }
        if PURE_NUMERIC.is_match(&text) || BODY_SCAN_BLOCKLIST.is_match(&text) {
            continue;
        }

        let lower = text.to_lowercase();
        let has_keyword = FOOTWEAR_KEYWORDS.iter().any(|kw| lower.contains(kw));
        let price = match_price_text(&text);
        if !has_keyword && price.is_none() {
            continue;
        }

        if seen.contains(&text) || is_navigation_item(&text, None) {
            continue;
        }

        seen.insert(text.clone());
        found.push(RawCandidate {
            name: text,
            price,
            image: None,
            product_url: None,
        });
    }

    found
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Nearest block-level ancestor (the element itself included) acting as the
/// product container for a price anchor.
fn closest_container(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    std::iter::once(element)
        .chain(element.ancestors().filter_map(ElementRef::wrap))
        .find(|el| {
            CONTAINER_TAGS.contains(&el.value().name())
                || el.value().classes().any(|c| CONTAINER_CLASSES.contains(&c))
        })
}

fn full_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Trimmed text of the first match under `scope`, or `None` when there is no
/// match or the text is empty.
fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(full_text).and_then(non_empty)
}

fn first_href(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_owned)
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// The element's own direct text (child element text stripped), first line.
fn own_text_first_line(element: ElementRef<'_>) -> String {
    let own: String = element
        .children()
        .filter_map(|node| node.value().as_text().map(|t| &**t))
        .collect();
    own.trim().lines().next().unwrap_or_default().trim().to_owned()
}

fn looks_priced(text: &str) -> bool {
    text.contains('€') || text.contains("EUR") || text.contains('$') || BARE_PRICE.is_match(text)
}

fn truncate_name(text: &str) -> String {
    if text.chars().count() < NAME_ELLIPSIS_AT {
        text.to_owned()
    } else {
        let head: String = text.chars().take(NAME_ELLIPSIS_AT - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_name_keeps_short_text() {
        assert_eq!(truncate_name("Nike Air Max 90"), "Nike Air Max 90");
    }

    #[test]
    fn truncate_name_cuts_long_text_with_ellipsis() {
        let long = "x".repeat(120);
        let name = truncate_name(&long);
        assert_eq!(name.chars().count(), NAME_ELLIPSIS_AT);
        assert!(name.ends_with("..."));
    }

    #[test]
    fn own_text_first_line_strips_child_element_text() {
        let html = "<div>Rieker sandaal\nblauw<span>€ 49,95</span></div>";
        let document = Html::parse_document(html);
        let sel = Selector::parse("div").expect("valid selector");
        let div = document.select(&sel).next().expect("fixture has a div");
        assert_eq!(own_text_first_line(div), "Rieker sandaal");
    }

    #[test]
    fn closest_container_walks_past_inline_elements() {
        let html = r#"<ul><li><b><span itemprop="price" content="9.99"></span></b></li></ul>"#;
        let document = Html::parse_document(html);
        let sel = Selector::parse("span").expect("valid selector");
        let span = document.select(&sel).next().expect("fixture has a span");
        let container = closest_container(span).expect("li should be found");
        assert_eq!(container.value().name(), "li");
    }

    #[test]
    fn price_anchor_with_empty_content_uses_visible_text() {
        let html = r#"
            <div>
                <h3>Lage Sneaker Wit</h3>
                <a href="/product/lage-sneaker-wit">bekijk</a>
                <span itemprop="price" content="">€ 39,95</span>
            </div>
        "#;
        let found = scan_price_anchors(&Html::parse_document(html));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].price.as_deref(), Some("€ 39,95"));
    }

    #[test]
    fn price_anchor_scan_dedupes_repeated_names() {
        // Listing pages repeat a tile for mobile and desktop layouts.
        let tile = r#"
            <div class="tile">
                <h3>Gabor Pump Zwart</h3>
                <a href="/product/gabor-pump">bekijk</a>
                <span itemprop="price" content="99.95"></span>
            </div>
        "#;
        let found = scan_price_anchors(&Html::parse_document(&format!("{tile}{tile}")));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Gabor Pump Zwart");
    }

    #[test]
    fn container_scan_dedupes_repeated_names() {
        let card = r#"
            <div class="product-card">
                <h4 class="product-name">Nike Air Max 90</h4>
                <span class="price">€ 129,99</span>
            </div>
        "#;
        let found = scan_product_containers(&Html::parse_document(&format!("{card}{card}")));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn keyword_scan_caps_results() {
        let items: String = (0..40)
            .map(|i| format!("<p>Sneaker model {i} kost € {i},99</p>"))
            .collect();
        let document = Html::parse_document(&format!("<body>{items}</body>"));
        let found = scan_keyword_prices(&document);
        assert_eq!(found.len(), KEYWORD_SCAN_CAP);
    }

    #[test]
    fn body_scan_accepts_keyword_without_price() {
        let document = Html::parse_document("<body><p>sneaker collectie hier</p></body>");
        let found = scan_body_text(&document);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "sneaker collectie hier");
        assert!(found[0].price.is_none());
    }

    #[test]
    fn body_scan_skips_pure_numbers_and_blocklist() {
        let document = Html::parse_document(
            "<body><p>123456</p><p>Checkout</p><p>Support</p></body>",
        );
        assert!(scan_body_text(&document).is_empty());
    }
}
