use crate::models::{preferences::ALL_PRICES, Product};

/// Filters the catalog by a price range selector
///
/// The selector is either `"all"` (no filtering) or `"low-high"`, where both
/// bounds are inclusive. A selector that cannot be parsed falls back to the
/// entire unfiltered catalog: a bad filter should never hide the whole store.
pub fn filter_by_price<'a>(catalog: &'a [Product], selector: &str) -> Vec<&'a Product> {
    if selector == ALL_PRICES {
        return catalog.iter().collect();
    }

    match parse_range(selector) {
        Some((low, high)) => catalog
            .iter()
            .filter(|product| product.price >= low && product.price <= high)
            .collect(),
        None => {
            tracing::warn!(
                selector = %selector,
                "Unparseable price range selector, returning unfiltered catalog"
            );
            catalog.iter().collect()
        }
    }
}

/// Parses a `"low-high"` selector into numeric bounds
///
/// An inverted range (low > high) is passed through as-is and simply matches
/// nothing.
fn parse_range(selector: &str) -> Option<(f64, f64)> {
    let (low, high) = selector.split_once('-')?;
    let low: f64 = low.trim().parse().ok()?;
    let high: f64 = high.trim().parse().ok()?;
    Some((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: "general".to_string(),
            subcategory: None,
            price,
            brand: "Acme".to_string(),
            description: None,
            features: None,
            rating: None,
            inventory: None,
            tags: None,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![product("p1", 50.0), product("p2", 100.0), product("p3", 500.0)]
    }

    #[test]
    fn test_all_selector_is_identity() {
        let catalog = sample_catalog();
        let filtered = filter_by_price(&catalog, "all");
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].id, "p1");
        assert_eq!(filtered[2].id, "p3");
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let catalog = sample_catalog();
        let filtered = filter_by_price(&catalog, "50-100");
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_range_excludes_out_of_bounds() {
        let catalog = sample_catalog();
        let filtered = filter_by_price(&catalog, "0-100");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.price <= 100.0));
    }

    #[test]
    fn test_malformed_selector_falls_back_to_full_catalog() {
        let catalog = sample_catalog();
        for selector in ["cheap", "10-abc", "abc-10", "", "100"] {
            let filtered = filter_by_price(&catalog, selector);
            assert_eq!(filtered.len(), 3, "selector {selector:?} should fall back");
        }
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let catalog = sample_catalog();
        let filtered = filter_by_price(&catalog, "500-50");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_fractional_bounds() {
        let catalog = vec![product("p1", 49.99)];
        assert_eq!(filter_by_price(&catalog, "49.5-50").len(), 1);
        assert!(filter_by_price(&catalog, "50-60").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_by_price(&[], "0-100").is_empty());
        assert!(filter_by_price(&[], "all").is_empty());
    }
}
