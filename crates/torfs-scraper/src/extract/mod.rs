//! Candidate extraction from listing HTML.
//!
//! Listing markup shifts between deployments, so extraction runs a cascade
//! of strategies ordered most-reliable first. The first strategy that yields
//! any candidate wins and the rest never run. When all of them come up empty
//! a broad body-text scan runs as an unconditional last resort.

mod image;
mod navigation;
mod price;
mod strategies;

use scraper::Html;

use crate::types::RawCandidate;

/// The extraction pass that produced a result. Order here is cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Schema.org price markers anchoring the nearest block container.
    PriceAnchors,
    /// Product-card-like containers (itemscope, `.product-*` classes).
    ProductContainers,
    /// `/product/` links plus their parent and grandparent elements.
    ProductLinks,
    /// Block-level elements with bounded, price-bearing text.
    ContentBlocks,
    /// Broad scan of every element for short price-bearing text.
    KeywordScan,
}

impl Strategy {
    const CASCADE: [Strategy; 5] = [
        Strategy::PriceAnchors,
        Strategy::ProductContainers,
        Strategy::ProductLinks,
        Strategy::ContentBlocks,
        Strategy::KeywordScan,
    ];

    fn run(self, document: &Html) -> Vec<RawCandidate> {
        match self {
            Strategy::PriceAnchors => strategies::scan_price_anchors(document),
            Strategy::ProductContainers => strategies::scan_product_containers(document),
            Strategy::ProductLinks => strategies::scan_product_links(document),
            Strategy::ContentBlocks => strategies::scan_content_blocks(document),
            Strategy::KeywordScan => strategies::scan_keyword_prices(document),
        }
    }
}

/// Outcome of a cascade run over one document.
#[derive(Debug)]
pub struct Extraction {
    pub candidates: Vec<RawCandidate>,
    /// The strategy that matched, or `None` when only the body-text fallback
    /// ran (its candidates, if any, are still in `candidates`).
    pub strategy: Option<Strategy>,
}

/// Runs the strategy cascade over a parsed listing document.
///
/// Strategies run in [`Strategy::CASCADE`] order; the first non-empty result
/// short-circuits the rest. An empty cascade falls through to the body-text
/// scan.
pub fn extract_candidates(document: &Html) -> Extraction {
    for strategy in Strategy::CASCADE {
        let candidates = strategy.run(document);
        if !candidates.is_empty() {
            tracing::debug!(?strategy, count = candidates.len(), "extraction strategy matched");
            return Extraction {
                candidates,
                strategy: Some(strategy),
            };
        }
        tracing::debug!(?strategy, "extraction strategy found nothing");
    }

    let candidates = strategies::scan_body_text(document);
    tracing::debug!(count = candidates.len(), "body-text fallback scan");
    Extraction {
        candidates,
        strategy: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_markup_is_handled_by_price_anchors() {
        let html = r#"
            <div class="product-tile">
                <h3>Test Shoe</h3>
                <a href="/product/test"><img src="/images/test-shoe.jpg"></a>
                <span class="value" itemprop="price" content="49.99">€49.99</span>
            </div>
        "#;
        let extraction = extract_candidates(&Html::parse_document(html));

        assert_eq!(extraction.strategy, Some(Strategy::PriceAnchors));
        assert_eq!(extraction.candidates.len(), 1);
        let candidate = &extraction.candidates[0];
        assert_eq!(candidate.name, "Test Shoe");
        assert_eq!(candidate.price.as_deref(), Some("€ 49,99"));
        assert_eq!(candidate.product_url.as_deref(), Some("/product/test"));
        assert_eq!(
            candidate.image.as_deref(),
            Some("https://www.torfs.be/images/test-shoe.jpg")
        );
    }

    #[test]
    fn first_matching_strategy_short_circuits_the_rest() {
        // Markup matches both the price-anchor scan and the product-container
        // scan; the earlier strategy must win.
        let html = r#"
            <div class="product-card">
                <h3 class="product-name">Adidas Stan Smith</h3>
                <a href="/product/stan-smith">bekijk</a>
                <span itemprop="price" content="89.99"></span>
            </div>
        "#;
        let extraction = extract_candidates(&Html::parse_document(html));
        assert_eq!(extraction.strategy, Some(Strategy::PriceAnchors));
    }

    #[test]
    fn class_based_cards_fall_through_to_product_containers() {
        let html = r#"
            <div class="product-card">
                <h4 class="product-name">Nike Air Max 90</h4>
                <span class="price">€ 129,99</span>
                <a href="/nl/product/nike-air-max-90.html"><img src="/images/airmax.jpg"></a>
            </div>
        "#;
        let extraction = extract_candidates(&Html::parse_document(html));

        assert_eq!(extraction.strategy, Some(Strategy::ProductContainers));
        let candidate = &extraction.candidates[0];
        assert_eq!(candidate.name, "Nike Air Max 90");
        assert_eq!(candidate.price.as_deref(), Some("€ 129,99"));
        assert_eq!(
            candidate.product_url.as_deref(),
            Some("/nl/product/nike-air-max-90.html")
        );
    }

    #[test]
    fn bare_product_links_fall_through_to_product_links() {
        let html = r#"
            <div>
                Vanaf € 89,99
                <a href="/product/pegasus">Nike Air Zoom Pegasus</a>
            </div>
        "#;
        let extraction = extract_candidates(&Html::parse_document(html));

        assert_eq!(extraction.strategy, Some(Strategy::ProductLinks));
        let candidate = &extraction.candidates[0];
        assert_eq!(candidate.name, "Nike Air Zoom Pegasus");
        assert_eq!(candidate.price.as_deref(), Some("€ 89,99"));
        assert_eq!(candidate.product_url.as_deref(), Some("/product/pegasus"));
    }

    #[test]
    fn headed_text_blocks_fall_through_to_content_blocks() {
        let html = r#"
            <div class="blok">
                <h4>Rieker sandaal blauw</h4>
                <span>€ 49,95</span>
            </div>
        "#;
        let extraction = extract_candidates(&Html::parse_document(html));

        assert_eq!(extraction.strategy, Some(Strategy::ContentBlocks));
        let candidate = &extraction.candidates[0];
        assert_eq!(candidate.name, "Rieker sandaal blauw");
        assert_eq!(candidate.price.as_deref(), Some("€ 49,95"));
    }

    #[test]
    fn unstructured_price_text_falls_through_to_keyword_scan() {
        let html = "<p>Dames sneaker € 59,99</p>";
        let extraction = extract_candidates(&Html::parse_document(html));

        assert_eq!(extraction.strategy, Some(Strategy::KeywordScan));
        assert_eq!(extraction.candidates.len(), 1);
        let candidate = &extraction.candidates[0];
        assert_eq!(candidate.name, "Dames sneaker € 59,99");
        assert_eq!(candidate.price.as_deref(), Some("€ 59,99"));
        assert!(candidate.image.is_none());
        assert!(candidate.product_url.is_none());
    }

    #[test]
    fn priceless_keyword_text_reaches_the_body_scan() {
        let html = "<body><p>sneaker collectie hier</p></body>";
        let extraction = extract_candidates(&Html::parse_document(html));

        assert_eq!(extraction.strategy, None);
        assert_eq!(extraction.candidates.len(), 1);
        assert_eq!(extraction.candidates[0].name, "sneaker collectie hier");
        assert!(extraction.candidates[0].price.is_none());
    }

    #[test]
    fn empty_document_yields_no_candidates() {
        let extraction = extract_candidates(&Html::parse_document("<body></body>"));
        assert_eq!(extraction.strategy, None);
        assert!(extraction.candidates.is_empty());
    }

    #[test]
    fn navigation_chrome_is_filtered_out() {
        let html = r#"
            <ul class="nav">
                <li class="item"><a href="/nl/sale">Sale</a></li>
                <li class="item"><a href="/nl/collections/dames">Dames collectie</a></li>
            </ul>
        "#;
        let extraction = extract_candidates(&Html::parse_document(html));
        assert!(
            extraction.candidates.iter().all(|c| c.name != "Sale"),
            "navigation entries must not survive extraction"
        );
    }
}
