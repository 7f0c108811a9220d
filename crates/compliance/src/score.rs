//! Collection-level compliance aggregation.

use chrono::NaiveDate;
use serde::Serialize;

use medtrack_catalog::Product;
use medtrack_core::calendar::days_until;
use medtrack_suppliers::Supplier;

use crate::status::LicenseStatus;

/// Counts backing the blended compliance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceStats {
    pub total_products: usize,
    /// Products whose expiry date is strictly after `today`.
    pub compliant_products: usize,
    pub total_suppliers: usize,
    /// Suppliers whose license classifies as [`LicenseStatus::Valid`].
    pub compliant_suppliers: usize,
}

impl ComplianceStats {
    /// Gather compliance counts in one pass per collection.
    pub fn gather(products: &[Product], suppliers: &[Supplier], today: NaiveDate) -> Self {
        Self {
            total_products: products.len(),
            compliant_products: products
                .iter()
                .filter(|p| days_until(p.expiry_date, today) > 0)
                .count(),
            total_suppliers: suppliers.len(),
            compliant_suppliers: suppliers
                .iter()
                .filter(|s| LicenseStatus::classify(s.license_expiry, today) == LicenseStatus::Valid)
                .count(),
        }
    }

    /// Blended 0–100 score: mean of the product and supplier compliant
    /// fractions, rounded.
    ///
    /// An empty collection contributes a fraction of 1.0 — nothing present
    /// means nothing non-compliant, and it keeps the score defined without a
    /// division guard at every call site.
    pub fn score(&self) -> u8 {
        let product_fraction = fraction(self.compliant_products, self.total_products);
        let supplier_fraction = fraction(self.compliant_suppliers, self.total_suppliers);
        (((product_fraction + supplier_fraction) / 2.0) * 100.0).round() as u8
    }
}

fn fraction(compliant: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        compliant as f64 / total as f64
    }
}

/// Convenience wrapper: gather and score in one call.
pub fn compliance_score(products: &[Product], suppliers: &[Supplier], today: NaiveDate) -> u8 {
    ComplianceStats::gather(products, suppliers, today).score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use medtrack_catalog::{ProductStatus, RegulatoryClass};
    use medtrack_core::{ProductId, SupplierId};
    use medtrack_suppliers::SupplierStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn product(id: &str, expiry: NaiveDate) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            sku: format!("SKU-{id}"),
            quantity: 10,
            min_threshold: 5,
            expiry_date: expiry,
            batch_number: format!("BT-{id}"),
            supplier_id: SupplierId::new("1"),
            status: ProductStatus::Active,
            category: "PPE".to_string(),
            unit_price_cents: 100,
            regulatory_class: RegulatoryClass::ClassI,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn supplier(id: &str, license_expiry: NaiveDate) -> Supplier {
        Supplier {
            id: SupplierId::new(id),
            name: format!("Supplier {id}"),
            contact: "Contact".to_string(),
            email: format!("{id}@example.com"),
            address: "Address".to_string(),
            rating: 4.5,
            status: SupplierStatus::Active,
            license_expiry,
            created_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        }
    }

    fn in_days(n: u64) -> NaiveDate {
        today().checked_add_days(Days::new(n)).unwrap()
    }

    #[test]
    fn score_blends_product_and_supplier_fractions() {
        // 1 of 2 products unexpired, 1 of 2 suppliers valid -> 50.
        let products = vec![product("1", in_days(200)), product("2", today())];
        let suppliers = vec![supplier("1", in_days(200)), supplier("2", in_days(60))];
        assert_eq!(compliance_score(&products, &suppliers, today()), 50);
    }

    #[test]
    fn expiring_today_counts_as_non_compliant() {
        let products = vec![product("1", today())];
        let suppliers = vec![supplier("1", in_days(200))];
        let stats = ComplianceStats::gather(&products, &suppliers, today());
        assert_eq!(stats.compliant_products, 0);
        assert_eq!(stats.score(), 50);
    }

    #[test]
    fn supplier_at_90_days_is_not_yet_valid() {
        let suppliers = vec![supplier("1", in_days(90))];
        let stats = ComplianceStats::gather(&[], &suppliers, today());
        assert_eq!(stats.compliant_suppliers, 0);

        let suppliers = vec![supplier("1", in_days(91))];
        let stats = ComplianceStats::gather(&[], &suppliers, today());
        assert_eq!(stats.compliant_suppliers, 1);
    }

    #[test]
    fn empty_collections_are_fully_compliant() {
        let suppliers = vec![supplier("1", in_days(200))];
        let products = vec![product("1", in_days(200))];
        assert_eq!(compliance_score(&[], &suppliers, today()), 100);
        assert_eq!(compliance_score(&products, &[], today()), 100);
        assert_eq!(compliance_score(&[], &[], today()), 100);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the score never depends on collection order.
            #[test]
            fn score_is_order_invariant(
                product_offsets in proptest::collection::vec(0u64..400, 0..12),
                supplier_offsets in proptest::collection::vec(0u64..400, 0..12),
            ) {
                let products: Vec<Product> = product_offsets
                    .iter()
                    .enumerate()
                    .map(|(i, d)| product(&i.to_string(), in_days(*d)))
                    .collect();
                let suppliers: Vec<Supplier> = supplier_offsets
                    .iter()
                    .enumerate()
                    .map(|(i, d)| supplier(&i.to_string(), in_days(*d)))
                    .collect();

                let forward = compliance_score(&products, &suppliers, today());

                let mut products_rev = products.clone();
                let mut suppliers_rev = suppliers.clone();
                products_rev.reverse();
                suppliers_rev.reverse();
                let backward = compliance_score(&products_rev, &suppliers_rev, today());

                prop_assert_eq!(forward, backward);
                prop_assert!(forward <= 100);
            }
        }
    }
}
