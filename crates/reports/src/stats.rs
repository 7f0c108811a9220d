use chrono::NaiveDate;
use serde::Serialize;

use medtrack_catalog::Product;
use medtrack_core::calendar::days_until;
use medtrack_ledger::Transaction;
use medtrack_suppliers::Supplier;

/// Days-remaining window for the "expiring soon" dashboard card.
const EXPIRING_SOON_DAYS: i64 = 30;

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_products: usize,
    /// Products at or below their minimum threshold (includes out-of-stock).
    pub low_stock_count: usize,
    /// Products expiring within 30 days (already-expired included).
    pub expiring_soon: usize,
    /// Total on-hand inventory value in cents.
    pub total_value_cents: u64,
    pub transaction_count: usize,
    pub active_suppliers: usize,
}

/// Compute the dashboard stats.
///
/// Each field is an independent reduction; none depends on collection order.
pub fn dashboard_stats(
    products: &[Product],
    suppliers: &[Supplier],
    transactions: &[Transaction],
    today: NaiveDate,
) -> DashboardStats {
    DashboardStats {
        total_products: products.len(),
        low_stock_count: products.iter().filter(|p| p.is_low_stock()).count(),
        expiring_soon: products
            .iter()
            .filter(|p| days_until(p.expiry_date, today) <= EXPIRING_SOON_DAYS)
            .count(),
        total_value_cents: products.iter().map(Product::stock_value_cents).sum(),
        transaction_count: transactions.len(),
        active_suppliers: suppliers.iter().filter(|s| s.is_active()).count(),
    }
}

/// Products expiring within `within_days`, still in the future.
///
/// Input order is preserved; the report view shows the first handful.
pub fn expiring_products<'a>(
    products: &'a [Product],
    today: NaiveDate,
    within_days: i64,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| {
            let days = days_until(p.expiry_date, today);
            days > 0 && days <= within_days
        })
        .collect()
}

/// Products at or below their minimum threshold, input order preserved.
pub fn low_stock_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}
