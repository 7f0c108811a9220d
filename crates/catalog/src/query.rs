//! Client-side product filtering.
//!
//! These mirror the search boxes and dropdowns of the inventory view: a text
//! needle matched against name and SKU, plus optional enum filters. Relative
//! order of the input is preserved.

use crate::product::{Product, ProductStatus};

/// Filter state owned by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive match against name or SKU. Empty matches everything.
    pub search: String,
    /// `None` means "all statuses".
    pub status: Option<ProductStatus>,
    /// `None` means "all categories".
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || product.name.to_lowercase().contains(&needle)
            || product.sku.to_lowercase().contains(&needle);
        let matches_status = self.status.is_none_or(|s| product.status == s);
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|c| product.category == c);
        matches_search && matches_status && matches_category
    }
}

/// Filter products, preserving input order.
pub fn search_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Distinct categories present in the catalog, sorted for dropdown display.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}
