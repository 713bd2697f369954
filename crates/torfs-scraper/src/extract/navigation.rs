//! Classification of candidate names as products vs. site chrome.

/// Exact-match navigation/category terms (compared against the lowercased,
/// trimmed candidate name). Mixes generic UI words, shop sections and the
/// Dutch category names used on torfs.be.
const NAVIGATION_TERMS: [&str; 51] = [
    "home",
    "menu",
    "search",
    "login",
    "register",
    "cart",
    "checkout",
    "contact",
    "about",
    "help",
    "support",
    "faq",
    "returns",
    "shipping",
    "privacy",
    "terms",
    "conditions",
    "newsletter",
    "account",
    "profile",
    "wishlist",
    "favorites",
    "compare",
    "filter",
    "sort",
    "view",
    "schoenen",
    "shoes",
    "category",
    "collection",
    "brand",
    "brands",
    "men",
    "women",
    "kids",
    "sale",
    "new",
    "trending",
    "popular",
    "accessories",
    "bags",
    "clothing",
    "more",
    "all",
    "show",
    "view all",
    "see all",
    "browse",
    "shop",
    "store",
    "outlet",
];

/// URL path fragments that indicate a navigation/category page rather than a
/// product page. A URL containing one of these is still kept when it also
/// contains `/product/`.
const NAVIGATION_URL_PATTERNS: [&str; 17] = [
    "/home",
    "/menu",
    "/category",
    "/categories",
    "/collection",
    "/collections",
    "/brand",
    "/brands",
    "/sale",
    "/outlet",
    "/new",
    "/trending",
    "/men",
    "/women",
    "/kids",
    "/accessories",
    "/bags",
];

/// Decides whether a candidate name/URL pair is site navigation noise.
///
/// Discards when the name is empty, exactly matches a navigation term, is
/// shorter than 3 characters, or when the URL contains a navigation path
/// fragment without a `/product/` marker.
pub(crate) fn is_navigation_item(name: &str, url: Option<&str>) -> bool {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return true;
    }

    if NAVIGATION_TERMS.contains(&normalized.as_str()) {
        return true;
    }

    if normalized.chars().count() < 3 {
        return true;
    }

    if let Some(url) = url {
        let url = url.to_lowercase();
        if !url.contains("/product/")
            && NAVIGATION_URL_PATTERNS
                .iter()
                .any(|pattern| url.contains(pattern))
        {
            return true;
        }
    }

    false
}
