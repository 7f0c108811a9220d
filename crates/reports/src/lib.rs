//! `medtrack-reports` — collection-level aggregation for dashboards.
//!
//! Every function here is a single-pass, order-independent reduction over the
//! in-memory collections.

pub mod breakdown;
pub mod stats;

pub use breakdown::{CategorySlice, MonthlyActivity, category_breakdown};
pub use stats::{DashboardStats, dashboard_stats, expiring_products, low_stock_products};
