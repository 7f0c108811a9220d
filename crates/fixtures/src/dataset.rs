use serde::{Deserialize, Serialize};
use tracing::warn;

use medtrack_auth::User;
use medtrack_catalog::Product;
use medtrack_core::{DomainError, DomainResult, ProductId, SupplierId, UserId};
use medtrack_ledger::Transaction;
use medtrack_purchasing::PurchaseOrder;
use medtrack_reports::MonthlyActivity;
use medtrack_suppliers::Supplier;

/// Display placeholder for a reference that failed to resolve.
pub const UNKNOWN: &str = "Unknown";

/// The full in-memory record set supplied by the data-provisioning boundary.
///
/// Field-named JSON keyed by entity id is the interchange format; see
/// [`Dataset::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Dataset {
    pub users: Vec<User>,
    pub suppliers: Vec<Supplier>,
    pub products: Vec<Product>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub transactions: Vec<Transaction>,
    pub monthly_activity: Vec<MonthlyActivity>,
}

impl Dataset {
    /// Parse a dataset from its JSON interchange form.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::validation(format!("dataset: {e}")))
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::validation(format!("dataset: {e}")))
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn supplier(&self, id: &SupplierId) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| &s.id == id)
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Product name for display; dangling ids degrade to [`UNKNOWN`].
    pub fn product_name(&self, id: &ProductId) -> &str {
        match self.product(id) {
            Some(product) => &product.name,
            None => {
                warn!(product = %id, "dangling product reference");
                UNKNOWN
            }
        }
    }

    /// Supplier name for display; dangling ids degrade to [`UNKNOWN`].
    pub fn supplier_name(&self, id: &SupplierId) -> &str {
        match self.supplier(id) {
            Some(supplier) => &supplier.name,
            None => {
                warn!(supplier = %id, "dangling supplier reference");
                UNKNOWN
            }
        }
    }

    /// User name for display; dangling ids degrade to [`UNKNOWN`].
    pub fn user_name(&self, id: &UserId) -> &str {
        match self.user(id) {
            Some(user) => &user.name,
            None => {
                warn!(user = %id, "dangling user reference");
                UNKNOWN
            }
        }
    }

    /// Check every foreign reference, returning the first dangling one.
    ///
    /// Resolution failures stay recoverable for display; this is for callers
    /// that want to surface data problems eagerly (e.g. at load time).
    pub fn check_references(&self) -> DomainResult<()> {
        for product in &self.products {
            if self.supplier(&product.supplier_id).is_none() {
                return Err(DomainError::dangling("supplier", product.supplier_id.as_str()));
            }
        }
        for order in &self.purchase_orders {
            if self.supplier(&order.supplier_id).is_none() {
                return Err(DomainError::dangling("supplier", order.supplier_id.as_str()));
            }
            for line in &order.items {
                if self.product(&line.product_id).is_none() {
                    return Err(DomainError::dangling("product", line.product_id.as_str()));
                }
            }
        }
        for tx in &self.transactions {
            if self.product(&tx.product_id).is_none() {
                return Err(DomainError::dangling("product", tx.product_id.as_str()));
            }
            if self.user(&tx.user_id).is_none() {
                return Err(DomainError::dangling("user", tx.user_id.as_str()));
            }
        }
        Ok(())
    }
}
