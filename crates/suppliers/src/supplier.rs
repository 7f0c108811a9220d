use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use medtrack_core::SupplierId;

/// Supplier account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    Active,
    Inactive,
}

/// Supplier record (immutable fixture input).
///
/// `rating` is a 0.0–5.0 review score; it takes no part in any derived
/// classification, so the float stays a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub rating: f64,
    pub status: SupplierStatus,
    pub license_expiry: NaiveDate,
    pub created_at: NaiveDate,
}

impl Supplier {
    pub fn is_active(&self) -> bool {
        self.status == SupplierStatus::Active
    }
}

/// Filter state owned by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct SupplierFilter {
    /// Case-insensitive match against name or contact. Empty matches everything.
    pub search: String,
    /// `None` means "all statuses".
    pub status: Option<SupplierStatus>,
}

impl SupplierFilter {
    pub fn matches(&self, supplier: &Supplier) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || supplier.name.to_lowercase().contains(&needle)
            || supplier.contact.to_lowercase().contains(&needle);
        let matches_status = self.status.is_none_or(|s| supplier.status == s);
        matches_search && matches_status
    }
}

/// Filter suppliers, preserving input order.
pub fn search_suppliers<'a>(
    suppliers: &'a [Supplier],
    filter: &SupplierFilter,
) -> Vec<&'a Supplier> {
    suppliers.iter().filter(|s| filter.matches(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(id: &str, name: &str, contact: &str, status: SupplierStatus) -> Supplier {
        Supplier {
            id: SupplierId::new(id),
            name: name.to_string(),
            contact: contact.to_string(),
            email: format!("{id}@example.com"),
            address: "123 Medical Drive".to_string(),
            rating: 4.5,
            status,
            license_expiry: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        }
    }

    #[test]
    fn search_matches_name_or_contact() {
        let suppliers = vec![
            supplier("1", "MedTech Solutions", "John Smith", SupplierStatus::Active),
            supplier("2", "PharmaCorp", "Lisa Anderson", SupplierStatus::Active),
        ];
        let filter = SupplierFilter {
            search: "anderson".to_string(),
            ..Default::default()
        };
        let hits = search_suppliers(&suppliers, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "PharmaCorp");
    }

    #[test]
    fn status_filter_excludes_inactive() {
        let suppliers = vec![
            supplier("1", "MedTech", "John", SupplierStatus::Active),
            supplier("2", "OldCorp", "Jane", SupplierStatus::Inactive),
        ];
        let filter = SupplierFilter {
            status: Some(SupplierStatus::Active),
            ..Default::default()
        };
        assert_eq!(search_suppliers(&suppliers, &filter).len(), 1);
    }
}
