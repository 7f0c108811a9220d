use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use medtrack_core::{OrderId, ProductId, SupplierId};

/// Purchase order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Delivered,
    Cancelled,
}

/// Purchase order line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price_cents: u64,
}

impl LineItem {
    /// Extended line total in cents.
    pub fn total_cents(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price_cents
    }
}

/// Purchase order record (immutable fixture input).
///
/// `total_amount_cents` is carried from the source data; `lines_total_cents`
/// recomputes it from the line items so the two can be cross-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PurchaseOrder {
    pub id: OrderId,
    pub order_number: String,
    pub supplier_id: SupplierId,
    pub order_date: NaiveDate,
    pub expected_delivery: NaiveDate,
    pub total_amount_cents: u64,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
    pub created_at: NaiveDate,
}

impl PurchaseOrder {
    /// Sum of the extended line totals in cents.
    pub fn lines_total_cents(&self) -> u64 {
        self.items.iter().map(LineItem::total_cents).sum()
    }

    /// Total units ordered across all lines.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// Filter state owned by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Case-insensitive match against the order number. Empty matches everything.
    pub search: String,
    /// `None` means "all statuses".
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, order: &PurchaseOrder) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty() || order.order_number.to_lowercase().contains(&needle);
        let matches_status = self.status.is_none_or(|s| order.status == s);
        matches_search && matches_status
    }
}

/// Filter purchase orders, preserving input order.
pub fn search_orders<'a>(orders: &'a [PurchaseOrder], filter: &OrderFilter) -> Vec<&'a PurchaseOrder> {
    orders.iter().filter(|o| filter.matches(o)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, number: &str, status: OrderStatus, items: Vec<LineItem>) -> PurchaseOrder {
        let total = items.iter().map(LineItem::total_cents).sum();
        PurchaseOrder {
            id: OrderId::new(id),
            order_number: number.to_string(),
            supplier_id: SupplierId::new("1"),
            order_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            expected_delivery: NaiveDate::from_ymd_opt(2024, 2, 25).unwrap(),
            total_amount_cents: total,
            status,
            items,
            created_at: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
        }
    }

    fn line(product_id: &str, quantity: u32, unit_price_cents: u64) -> LineItem {
        LineItem {
            product_id: ProductId::new(product_id),
            quantity,
            unit_price_cents,
        }
    }

    #[test]
    fn line_total_is_quantity_times_unit_price() {
        assert_eq!(line("1", 2000, 250).total_cents(), 500_000);
    }

    #[test]
    fn order_total_matches_fixture_arithmetic() {
        // PO-2024-001: 2000 x $2.50 + 30 x $8.50 = $5250.00
        let order = order(
            "1",
            "PO-2024-001",
            OrderStatus::Delivered,
            vec![line("1", 2000, 250), line("5", 30, 850)],
        );
        assert_eq!(order.lines_total_cents(), 525_000);
        assert_eq!(order.lines_total_cents(), order.total_amount_cents);
        assert_eq!(order.total_units(), 2030);
    }

    #[test]
    fn search_matches_order_number_and_status() {
        let orders = vec![
            order("1", "PO-2024-001", OrderStatus::Delivered, vec![]),
            order("2", "PO-2024-002", OrderStatus::Pending, vec![]),
        ];
        let filter = OrderFilter {
            search: "po-2024".to_string(),
            status: Some(OrderStatus::Pending),
        };
        let hits = search_orders(&orders, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].order_number, "PO-2024-002");
    }
}
