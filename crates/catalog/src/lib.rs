//! Product catalog domain module.
//!
//! Product records are immutable fixture inputs; everything derived from them
//! (stock classification, search) is a pure function over the record plus the
//! caller's filter state.

pub mod product;
pub mod query;

pub use product::{Product, ProductStatus, RegulatoryClass, StockStatus};
pub use query::{ProductFilter, categories, search_products};
