//! Calendar arithmetic shared by the classification layer.
//!
//! Every classifier takes an explicit `today` argument; nothing in the domain
//! reads the wall clock.

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};

/// Date format used throughout the fixture data (`2025-06-30`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO `YYYY-MM-DD` date.
///
/// An unparseable date is a hard data error (`InvalidDate`), never a silently
/// propagated sentinel value.
pub fn parse_date(s: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DomainError::invalid_date(format!("{s:?}: {e}")))
}

/// Whole days from `today` until `date`.
///
/// Zero or negative means the date has already passed. This is the single
/// definition of "days until expiry": both the compliance path and the alert
/// path call through here so their bucket boundaries cannot drift apart.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}
