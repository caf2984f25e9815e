//! # Search/Filter Engine
//!
//! Case-insensitive substring narrowing of the fetched product collection.
//!
//! Category scoping does not happen here: the page re-fetches the category-scoped list
//! from the catalog and only the free-text term is applied locally. All functions are
//! pure and preserve input order.

use crate::model::Product;

/// The term and category the page is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub term: String,
    /// Applied upstream by a scoped fetch; `None` is "All Products".
    pub category: Option<String>,
}

impl FilterCriteria {
    /// True when the page is showing search results rather than the landing view.
    pub fn is_active(&self) -> bool {
        !self.term.is_empty() || self.category.is_some()
    }

    pub fn matches(&self, product: &Product) -> bool {
        product_matches(product, &self.term)
    }
}

/// A product matches when its title or category contains `term`, ignoring case.
/// The empty term matches everything.
pub fn product_matches(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    contains_lowercase(&product.title, &needle) || contains_lowercase(&product.category, &needle)
}

pub fn filter_products(products: &[Product], term: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product_matches(product, term))
        .cloned()
        .collect()
}

/// The same rule applied to category labels, for search suggestions.
pub fn filter_categories(categories: &[String], term: &str) -> Vec<String> {
    let needle = term.to_lowercase();
    categories
        .iter()
        .filter(|category| contains_lowercase(category, &needle))
        .cloned()
        .collect()
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Red Shirt", 19.99, "clothing"),
            Product::new(2, "Blue Jeans", 49.5, "clothing"),
            Product::new(3, "SSD 1TB", 109.0, "electronics"),
            Product::new(4, "Gold Ring", 695.0, "jewelery"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_term_matches_title_case_insensitively() {
        let single = vec![Product::new(1, "Red Shirt", 19.99, "clothing")];
        assert_eq!(ids(&filter_products(&single, "red")), vec![1]);
        assert_eq!(ids(&filter_products(&single, "RED")), vec![1]);
        assert!(filter_products(&single, "blue").is_empty());
    }

    #[test]
    fn test_term_matches_category() {
        assert_eq!(ids(&filter_products(&catalog(), "CLOTH")), vec![1, 2]);
        assert_eq!(ids(&filter_products(&catalog(), "tronic")), vec![3]);
    }

    #[test]
    fn test_empty_term_is_identity() {
        assert_eq!(filter_products(&catalog(), ""), catalog());
    }

    #[test]
    fn test_category_suggestions() {
        let categories = vec![
            "electronics".to_string(),
            "jewelery".to_string(),
            "men's clothing".to_string(),
            "women's clothing".to_string(),
        ];
        assert_eq!(
            filter_categories(&categories, "Clo"),
            vec!["men's clothing".to_string(), "women's clothing".to_string()]
        );
        assert_eq!(filter_categories(&categories, ""), categories);
        assert!(filter_categories(&categories, "toys").is_empty());
    }

    #[test]
    fn test_criteria_activity() {
        assert!(!FilterCriteria::default().is_active());
        let term_only = FilterCriteria {
            term: "ring".into(),
            category: None,
        };
        assert!(term_only.is_active());
        assert!(term_only.matches(&catalog()[3]));
        let category_only = FilterCriteria {
            term: String::new(),
            category: Some("jewelery".into()),
        };
        assert!(category_only.is_active());
    }

    fn arb_product() -> impl Strategy<Value = Product> {
        (any::<u32>(), "[a-zA-Z ]{0,12}", "[a-zA-Z' ]{0,10}")
            .prop_map(|(id, title, category)| Product::new(id, title, 1.0, category))
    }

    proptest! {
        #[test]
        fn prop_retained_iff_title_or_category_contains_term(
            products in prop::collection::vec(arb_product(), 0..20),
            term in "[a-zA-Z]{0,3}",
        ) {
            let filtered = filter_products(&products, &term);
            let lowered = term.to_lowercase();
            let expected: Vec<Product> = products
                .iter()
                .filter(|p| {
                    term.is_empty()
                        || p.title.to_lowercase().contains(&lowered)
                        || p.category.to_lowercase().contains(&lowered)
                })
                .cloned()
                .collect();
            prop_assert_eq!(&filtered, &expected);
        }

        #[test]
        fn prop_filter_is_idempotent(
            products in prop::collection::vec(arb_product(), 0..20),
            term in "[a-zA-Z]{0,3}",
        ) {
            let once = filter_products(&products, &term);
            let twice = filter_products(&once, &term);
            prop_assert_eq!(once, twice);
        }
    }
}
