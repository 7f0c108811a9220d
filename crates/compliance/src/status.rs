//! Per-record status classification.
//!
//! Both classifiers bucket on days remaining with the same closed boundaries:
//! `<= 0`, `1..=30`, `31..=90`, `> 90`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use medtrack_core::calendar::days_until;

/// Days-remaining bound for the critical/expiring-soon bucket.
pub const CRITICAL_WINDOW_DAYS: i64 = 30;
/// Days-remaining bound for the warning/renewal-due bucket.
pub const WARNING_WINDOW_DAYS: i64 = 90;

/// Product expiry proximity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    Critical,
    Warning,
    Compliant,
}

impl ExpiryStatus {
    /// Classify an expiry date against `today`.
    pub fn classify(expiry_date: NaiveDate, today: NaiveDate) -> Self {
        match days_until(expiry_date, today) {
            d if d <= 0 => ExpiryStatus::Expired,
            d if d <= CRITICAL_WINDOW_DAYS => ExpiryStatus::Critical,
            d if d <= WARNING_WINDOW_DAYS => ExpiryStatus::Warning,
            _ => ExpiryStatus::Compliant,
        }
    }
}

impl core::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ExpiryStatus::Expired => f.write_str("Expired"),
            ExpiryStatus::Critical => f.write_str("Critical"),
            ExpiryStatus::Warning => f.write_str("Warning"),
            ExpiryStatus::Compliant => f.write_str("Compliant"),
        }
    }
}

/// Supplier license validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    Expired,
    ExpiringSoon,
    RenewalDue,
    Valid,
}

impl LicenseStatus {
    /// Classify a license expiry date against `today`.
    pub fn classify(license_expiry: NaiveDate, today: NaiveDate) -> Self {
        match days_until(license_expiry, today) {
            d if d <= 0 => LicenseStatus::Expired,
            d if d <= CRITICAL_WINDOW_DAYS => LicenseStatus::ExpiringSoon,
            d if d <= WARNING_WINDOW_DAYS => LicenseStatus::RenewalDue,
            _ => LicenseStatus::Valid,
        }
    }
}

impl core::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LicenseStatus::Expired => f.write_str("Expired"),
            LicenseStatus::ExpiringSoon => f.write_str("Expiring Soon"),
            LicenseStatus::RenewalDue => f.write_str("Renewal Due"),
            LicenseStatus::Valid => f.write_str("Valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn in_days(n: u64) -> NaiveDate {
        today().checked_add_days(Days::new(n)).unwrap()
    }

    #[test]
    fn expiry_boundaries_are_closed_on_the_bucket_edge() {
        let today = today();
        assert_eq!(ExpiryStatus::classify(today, today), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::classify(in_days(1), today), ExpiryStatus::Critical);
        assert_eq!(ExpiryStatus::classify(in_days(30), today), ExpiryStatus::Critical);
        assert_eq!(ExpiryStatus::classify(in_days(31), today), ExpiryStatus::Warning);
        assert_eq!(ExpiryStatus::classify(in_days(90), today), ExpiryStatus::Warning);
        assert_eq!(ExpiryStatus::classify(in_days(91), today), ExpiryStatus::Compliant);
    }

    #[test]
    fn past_dates_are_expired() {
        let today = today();
        let last_week = NaiveDate::from_ymd_opt(2024, 2, 23).unwrap();
        assert_eq!(ExpiryStatus::classify(last_week, today), ExpiryStatus::Expired);
        assert_eq!(LicenseStatus::classify(last_week, today), LicenseStatus::Expired);
    }

    #[test]
    fn license_boundaries_mirror_expiry_boundaries() {
        let today = today();
        assert_eq!(LicenseStatus::classify(in_days(30), today), LicenseStatus::ExpiringSoon);
        assert_eq!(LicenseStatus::classify(in_days(31), today), LicenseStatus::RenewalDue);
        assert_eq!(LicenseStatus::classify(in_days(90), today), LicenseStatus::RenewalDue);
        assert_eq!(LicenseStatus::classify(in_days(91), today), LicenseStatus::Valid);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the two classifiers bucket identically on days remaining.
            #[test]
            fn expiry_and_license_buckets_agree(offset in -400i64..400) {
                let today = today();
                let date = if offset >= 0 {
                    today.checked_add_days(Days::new(offset as u64)).unwrap()
                } else {
                    today.checked_sub_days(Days::new((-offset) as u64)).unwrap()
                };
                let expiry = ExpiryStatus::classify(date, today);
                let license = LicenseStatus::classify(date, today);
                let same_bucket = matches!(
                    (expiry, license),
                    (ExpiryStatus::Expired, LicenseStatus::Expired)
                        | (ExpiryStatus::Critical, LicenseStatus::ExpiringSoon)
                        | (ExpiryStatus::Warning, LicenseStatus::RenewalDue)
                        | (ExpiryStatus::Compliant, LicenseStatus::Valid)
                );
                prop_assert!(same_bucket, "{expiry:?} vs {license:?} at offset {offset}");
            }
        }
    }
}
