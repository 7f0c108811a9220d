//! Purchasing domain module (purchase orders and line items).

pub mod order;

pub use order::{LineItem, OrderFilter, OrderStatus, PurchaseOrder, search_orders};
