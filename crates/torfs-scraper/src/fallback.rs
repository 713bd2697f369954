//! Sample catalogue served when the live listing cannot be reached.

use chrono::{DateTime, Utc};
use torfs_core::products::ProductRecord;

/// Builds the five-item sample catalogue.
///
/// Served when the listing site refuses the connection or blocks the request,
/// so the API stays demonstrable without live access. Each record carries the
/// provided timestamp and a `-sample` marker in its product URL.
#[must_use]
pub fn sample_products(scraped_at: DateTime<Utc>) -> Vec<ProductRecord> {
    let samples = [
        (
            "Adidas Hoops 3.0 Mid Sneakers",
            "€89,99",
            "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=300&h=300&fit=crop",
            "https://www.torfs.be/nl/product/adidas-hoops-sample",
        ),
        (
            "Nike Air Force 1 '07 White",
            "€129,95",
            "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?w=300&h=300&fit=crop",
            "https://www.torfs.be/nl/product/nike-air-force-sample",
        ),
        (
            "Converse Chuck Taylor All Star",
            "€59,99",
            "https://images.unsplash.com/photo-1514989940723-e8e51635b782?w=300&h=300&fit=crop",
            "https://www.torfs.be/nl/product/converse-chuck-sample",
        ),
        (
            "Vans Old Skool Black/White",
            "€79,95",
            "https://images.unsplash.com/photo-1525966222134-fcfa99b8ae77?w=300&h=300&fit=crop",
            "https://www.torfs.be/nl/product/vans-oldskool-sample",
        ),
        (
            "Puma RS-X³ Puzzle Sneakers",
            "€149,99",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=300&h=300&fit=crop",
            "https://www.torfs.be/nl/product/puma-rsx-sample",
        ),
    ];

    samples
        .into_iter()
        .enumerate()
        .map(|(index, (name, price, image, url))| ProductRecord {
            id: u32::try_from(index + 1).unwrap_or(u32::MAX),
            name: name.to_owned(),
            price: price.to_owned(),
            image: Some(image.to_owned()),
            url: Some(url.to_owned()),
            scraped_at,
        })
        .collect()
}
