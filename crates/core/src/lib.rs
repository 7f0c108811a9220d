//! `medtrack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the shared domain error model, and calendar arithmetic
//! used by the classification layer.

pub mod calendar;
pub mod error;
pub mod id;

pub use calendar::{days_until, parse_date};
pub use error::{DomainError, DomainResult};
pub use id::{AlertId, OrderId, ProductId, SupplierId, TransactionId, UserId};
