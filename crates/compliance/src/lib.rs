//! `medtrack-compliance` — the derived-status classification layer.
//!
//! Pure, deterministic functions from a record plus an explicit `today` to a
//! status bucket, and the blended compliance score over whole collections.
//! The alert synthesis path reuses these same classifiers so the day-bucket
//! boundaries cannot diverge between the two.

pub mod score;
pub mod status;

pub use score::{ComplianceStats, compliance_score};
pub use status::{ExpiryStatus, LicenseStatus};
