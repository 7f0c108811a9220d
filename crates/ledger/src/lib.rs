//! Stock transaction ledger module.
//!
//! Transactions are immutable fixture inputs. The one integrity rule enforced
//! here is that the signed quantity must agree with the declared direction;
//! a record violating it is excluded from flow totals rather than trusted.

pub mod transaction;

pub use transaction::{
    Direction, FlowTotals, Transaction, TransactionFilter, flow_totals, search_transactions,
};
