use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use medtrack_core::{ProductId, SupplierId};

/// Product lifecycle status as carried in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Expired,
    Recalled,
}

/// Regulatory device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegulatoryClass {
    ClassI,
    ClassIi,
    ClassIii,
}

/// Stock sufficiency classification.
///
/// A quantity of exactly zero is its own state, not merely "low".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classify a quantity against its configured minimum threshold.
    ///
    /// Boundaries: `0` is OutOfStock, `1..=threshold` is LowStock,
    /// `threshold + 1..` is InStock.
    pub fn classify(quantity: u32, min_threshold: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= min_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockStatus::OutOfStock => f.write_str("Out of Stock"),
            StockStatus::LowStock => f.write_str("Low Stock"),
            StockStatus::InStock => f.write_str("In Stock"),
        }
    }
}

/// Product record (immutable fixture input).
///
/// Prices are in the smallest currency unit (cents) to keep totals exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub min_threshold: u32,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
    pub supplier_id: SupplierId,
    pub status: ProductStatus,
    pub category: String,
    pub unit_price_cents: u64,
    pub regulatory_class: RegulatoryClass,
    pub created_at: NaiveDate,
}

impl Product {
    /// Stock classification for this record.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.min_threshold)
    }

    /// Quantity at or below the configured minimum (includes out-of-stock).
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_threshold
    }

    /// On-hand value of this product in cents.
    pub fn stock_value_cents(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price_cents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_out_of_stock_for_any_threshold() {
        for threshold in [0, 1, 100, u32::MAX] {
            assert_eq!(StockStatus::classify(0, threshold), StockStatus::OutOfStock);
        }
    }

    #[test]
    fn threshold_boundary_is_low_stock() {
        assert_eq!(StockStatus::classify(100, 100), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(101, 100), StockStatus::InStock);
        assert_eq!(StockStatus::classify(1, 100), StockStatus::LowStock);
    }

    #[test]
    fn stock_value_multiplies_quantity_by_unit_price() {
        let product = Product {
            id: ProductId::new("1"),
            name: "Surgical Masks (N95)".to_string(),
            sku: "SKU-001".to_string(),
            quantity: 1250,
            min_threshold: 500,
            expiry_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            batch_number: "BT-2024-001".to_string(),
            supplier_id: SupplierId::new("1"),
            status: ProductStatus::Active,
            category: "PPE".to_string(),
            unit_price_cents: 250,
            regulatory_class: RegulatoryClass::ClassIi,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        };
        assert_eq!(product.stock_value_cents(), 312_500);
        assert_eq!(product.stock_status(), StockStatus::InStock);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the three stock states partition the quantity axis.
            #[test]
            fn classification_is_total_and_consistent(quantity in 0u32..10_000, threshold in 0u32..10_000) {
                let status = StockStatus::classify(quantity, threshold);
                match status {
                    StockStatus::OutOfStock => prop_assert_eq!(quantity, 0),
                    StockStatus::LowStock => {
                        prop_assert!(quantity > 0);
                        prop_assert!(quantity <= threshold);
                    }
                    StockStatus::InStock => prop_assert!(quantity > threshold),
                }
            }
        }
    }
}
