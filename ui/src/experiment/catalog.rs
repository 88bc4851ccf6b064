//! Product catalog: the embedded static data set and the provider seam.
//!
//! The default catalog is a fixed 100-item list embedded at compile time
//! (items 1-50 are bakery goods, 51-100 are fruit), sliced per session by
//! [`ProductRange`]. `CatalogProvider` is the seam an AI-generated catalog
//! variant would plug into; any such source must emit the same JSON contract
//! this module parses, so the tolerant payload parser lives here too.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::ProductRange;

const CATALOG_JSON: &str = include_str!("../../assets/data/products.json");

/// One catalog item. Field names mirror the upstream camelCase JSON contract.
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub original_price: u32,
    pub discounted_price: u32,
    pub discount_percentage: u8,
    pub rating: f64,
    pub review_count: u32,
    pub image_keyword: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog payload is not valid product JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Supplies the ordered product list for a session's range.
///
/// Implementations degrade to an empty list rather than failing: a session
/// with no products still proceeds (the grid just renders empty).
pub trait CatalogProvider: std::fmt::Debug {
    fn products_for(&self, range: ProductRange) -> Vec<Product>;
}

/// The embedded fixed catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl CatalogProvider for StaticCatalog {
    fn products_for(&self, range: ProductRange) -> Vec<Product> {
        slice_range(&EMBEDDED, range)
    }
}

static EMBEDDED: Lazy<Vec<Product>> = Lazy::new(|| {
    match parse_catalog_payload(CATALOG_JSON) {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!("embedded catalog failed to parse: {err}");
            Vec::new()
        }
    }
});

/// Parse a catalog payload, tolerating the Markdown code fences that
/// generator backends wrap their JSON in.
pub fn parse_catalog_payload(raw: &str) -> Result<Vec<Product>, CatalogError> {
    let cleaned = strip_code_fences(raw);
    let products: Vec<Product> = serde_json::from_str(cleaned.trim())?;
    Ok(products)
}

/// Take the 50-item slice for `range` out of a full ordered catalog.
pub fn slice_range(products: &[Product], range: ProductRange) -> Vec<Product> {
    products
        .iter()
        .skip(range.offset())
        .take(ProductRange::SLICE_LEN)
        .cloned()
        .collect()
}

fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_is_complete_and_ordered() {
        assert_eq!(EMBEDDED.len(), 100);
        for (idx, product) in EMBEDDED.iter().enumerate() {
            assert_eq!(product.id, format!("p{}", idx + 1));
        }
    }

    #[test]
    fn embedded_prices_are_consistent() {
        for product in EMBEDDED.iter() {
            assert!(
                product.discounted_price < product.original_price,
                "{} is not discounted",
                product.id
            );
            let recomputed = 100.0
                - (product.discounted_price as f64 / product.original_price as f64) * 100.0;
            assert_eq!(
                recomputed.round() as u8,
                product.discount_percentage,
                "{} discount percentage is inconsistent",
                product.id
            );
        }
    }

    #[test]
    fn slices_split_the_catalog_at_fifty() {
        let first = slice_range(&EMBEDDED, ProductRange::Range1To50);
        let second = slice_range(&EMBEDDED, ProductRange::Range51To100);

        assert_eq!(first.len(), 50);
        assert_eq!(second.len(), 50);
        assert_eq!(first[0].id, "p1");
        assert_eq!(first[49].id, "p50");
        assert_eq!(second[0].id, "p51");
        assert_eq!(second[49].id, "p100");
    }

    #[test]
    fn parser_accepts_fenced_payloads() {
        let fenced = "```json\n[{\"id\":\"g1\",\"name\":\"테스트 상품\",\"description\":\"설명\",\
                      \"originalPrice\":10000,\"discountedPrice\":8000,\"discountPercentage\":20,\
                      \"rating\":4.2,\"reviewCount\":35,\"imageKeyword\":\"test product\"}]\n```";
        let products = parse_catalog_payload(fenced).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "g1");
        assert_eq!(products[0].discounted_price, 8000);
    }

    #[test]
    fn parser_rejects_malformed_payloads() {
        assert!(parse_catalog_payload("not json at all").is_err());
        assert!(parse_catalog_payload("{\"single\": \"object\"}").is_err());
    }

    #[test]
    fn short_catalogs_yield_short_slices() {
        let few = parse_catalog_payload(
            "[{\"id\":\"g1\",\"name\":\"A\",\"description\":\"d\",\"originalPrice\":1000,\
             \"discountedPrice\":900,\"discountPercentage\":10,\"rating\":4.0,\
             \"reviewCount\":1,\"imageKeyword\":\"a\"}]",
        )
        .unwrap();
        assert_eq!(slice_range(&few, ProductRange::Range1To50).len(), 1);
        assert!(slice_range(&few, ProductRange::Range51To100).is_empty());
    }
}
