use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use medtrack_core::{DomainError, DomainResult, ProductId, TransactionId, UserId};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

/// Stock transaction record (immutable fixture input).
///
/// `quantity` is signed: positive for inbound, negative for outbound. The
/// sign and the `direction` field are redundant by design; `check_integrity`
/// rejects records where they disagree instead of picking a winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    pub id: TransactionId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub transaction_date: NaiveDate,
    pub direction: Direction,
    pub reference: String,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Verify that the quantity sign agrees with the declared direction.
    ///
    /// A zero quantity carries no movement in either direction and is also
    /// rejected.
    pub fn check_integrity(&self) -> DomainResult<()> {
        let agrees = match self.direction {
            Direction::Inbound => self.quantity > 0,
            Direction::Outbound => self.quantity < 0,
        };
        if agrees {
            Ok(())
        } else {
            Err(DomainError::quantity_sign_mismatch(format!(
                "transaction {}: quantity {} declared {:?}",
                self.id, self.quantity, self.direction
            )))
        }
    }

    /// Magnitude of the movement in units.
    pub fn units(&self) -> u64 {
        self.quantity.unsigned_abs()
    }
}

/// Inbound/outbound/net movement summary over a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FlowTotals {
    /// Units received.
    pub inbound_units: u64,
    /// Units issued (absolute value).
    pub outbound_units: u64,
    /// Signed net movement.
    pub net_units: i64,
    /// Records excluded because their sign disagreed with their direction.
    pub skipped: usize,
}

/// Reduce transactions into flow totals.
///
/// Integrity-violating records degrade only themselves: they are skipped with
/// a warning, never abort the reduction.
pub fn flow_totals(transactions: &[Transaction]) -> FlowTotals {
    let mut totals = FlowTotals::default();
    for tx in transactions {
        if let Err(err) = tx.check_integrity() {
            warn!(transaction = %tx.id, %err, "excluding transaction from flow totals");
            totals.skipped += 1;
            continue;
        }
        match tx.direction {
            Direction::Inbound => totals.inbound_units += tx.units(),
            Direction::Outbound => totals.outbound_units += tx.units(),
        }
        totals.net_units += tx.quantity;
    }
    totals
}

/// Filter state owned by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive match against the reference string. Empty matches everything.
    pub search: String,
    /// `None` means "both directions".
    pub direction: Option<Direction>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty() || tx.reference.to_lowercase().contains(&needle);
        let matches_direction = self.direction.is_none_or(|d| tx.direction == d);
        matches_search && matches_direction
    }
}

/// Filter transactions, preserving input order.
pub fn search_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| filter.matches(t)).collect()
}
