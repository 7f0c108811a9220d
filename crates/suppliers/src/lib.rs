//! Supplier domain module.
//!
//! Supplier records are immutable fixture inputs; license classification over
//! them lives in `medtrack-compliance`.

pub mod supplier;

pub use supplier::{Supplier, SupplierFilter, SupplierStatus, search_suppliers};
