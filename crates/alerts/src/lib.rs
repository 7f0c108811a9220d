//! `medtrack-alerts` — stateless alert synthesis and the transient board.
//!
//! Alerts are recomputed from the product and supplier collections on demand;
//! nothing is written back to the source records. Acknowledge/dismiss state
//! lives only on the [`AlertBoard`] and evaporates on re-synthesis.

pub mod alert;
pub mod board;
pub mod synthesis;

pub use alert::{Alert, AlertCategory, Priority, Severity};
pub use board::{AlertBoard, AlertCounts, AlertFilter};
pub use synthesis::synthesize_alerts;
