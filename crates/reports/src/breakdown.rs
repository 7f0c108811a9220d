//! Category and activity breakdowns for the reports view.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use medtrack_catalog::Product;

/// One slice of the category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub count: usize,
    /// On-hand value of the category in cents.
    pub value_cents: u64,
}

/// Per-category product counts and values, sorted by category name.
pub fn category_breakdown(products: &[Product]) -> Vec<CategorySlice> {
    let mut by_category: BTreeMap<&str, (usize, u64)> = BTreeMap::new();
    for product in products {
        let entry = by_category.entry(product.category.as_str()).or_default();
        entry.0 += 1;
        entry.1 += product.stock_value_cents();
    }
    by_category
        .into_iter()
        .map(|(name, (count, value_cents))| CategorySlice {
            name: name.to_string(),
            count,
            value_cents,
        })
        .collect()
}

/// One month of the activity trend chart (fixture series, typed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MonthlyActivity {
    pub month: String,
    pub transactions: u32,
    pub value_cents: u64,
}
