//! Alert synthesis rules.
//!
//! One pass over products (expiry and stock rules) and suppliers (license
//! rule), then a deterministic sort. Two calls with the same inputs and `now`
//! produce the same list.

use chrono::{DateTime, NaiveDate, Utc};

use medtrack_catalog::Product;
use medtrack_compliance::status::{CRITICAL_WINDOW_DAYS, WARNING_WINDOW_DAYS};
use medtrack_core::{AlertId, calendar::days_until};
use medtrack_suppliers::Supplier;

use crate::alert::{Alert, AlertCategory, Priority, Severity};

/// Days remaining at or below which an expiry alert is critical.
const EXPIRY_CRITICAL_DAYS: i64 = 7;

/// Synthesize the alert list for the current collections.
///
/// `today` drives the day-bucket predicates; `now` stamps the alerts. Ordering
/// is timestamp descending, then category, then source id — total even though
/// every alert in one pass carries the same timestamp.
pub fn synthesize_alerts(
    products: &[Product],
    suppliers: &[Supplier],
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for product in products {
        let days = days_until(product.expiry_date, today);
        // Already-expired stock is a compliance finding, not an expiry alert.
        if days > 0 && days <= CRITICAL_WINDOW_DAYS {
            let critical = days <= EXPIRY_CRITICAL_DAYS;
            alerts.push(Alert {
                id: AlertId::new(format!("exp-{}", product.id)),
                severity: if critical { Severity::Critical } else { Severity::Warning },
                category: AlertCategory::Expiry,
                title: format!("Product Expiring Soon: {}", product.name),
                description: format!(
                    "{} (Batch: {}) expires in {} days",
                    product.name, product.batch_number, days
                ),
                timestamp: now,
                acknowledged: false,
                priority: if critical { Priority::High } else { Priority::Medium },
            });
        }
    }

    for product in products {
        if product.is_low_stock() {
            let critical = product.quantity == 0;
            alerts.push(Alert {
                id: AlertId::new(format!("stock-{}", product.id)),
                severity: if critical { Severity::Critical } else { Severity::Warning },
                category: AlertCategory::Stock,
                title: format!("Low Stock Alert: {}", product.name),
                description: format!(
                    "{} has {} units remaining (minimum: {})",
                    product.name, product.quantity, product.min_threshold
                ),
                timestamp: now,
                acknowledged: false,
                priority: if critical { Priority::High } else { Priority::Medium },
            });
        }
    }

    for supplier in suppliers {
        let days = days_until(supplier.license_expiry, today);
        if days <= WARNING_WINDOW_DAYS {
            let critical = days <= CRITICAL_WINDOW_DAYS;
            alerts.push(Alert {
                id: AlertId::new(format!("sup-{}", supplier.id)),
                severity: if critical { Severity::Critical } else { Severity::Warning },
                category: AlertCategory::Supplier,
                title: format!("Supplier License Expiring: {}", supplier.name),
                description: format!("{}'s license expires in {} days", supplier.name, days),
                timestamp: now,
                acknowledged: false,
                priority: if critical { Priority::High } else { Priority::Medium },
            });
        }
    }

    alerts.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.category.cmp(&b.category))
            .then_with(|| a.id.cmp(&b.id))
    });
    alerts
}
