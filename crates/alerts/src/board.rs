//! Transient alert interaction state.

use serde::Serialize;

use medtrack_core::AlertId;

use crate::alert::{Alert, Severity};

/// Filter contract exposed to the presentation layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertFilter {
    /// `None` means "all severities".
    pub severity: Option<Severity>,
    pub include_acknowledged: bool,
}

/// Unacknowledged/total tallies for the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AlertCounts {
    pub critical_unacknowledged: usize,
    pub warning_unacknowledged: usize,
    pub total_unacknowledged: usize,
    pub total: usize,
}

/// Holds one synthesis pass plus the user's acknowledge/dismiss interactions.
///
/// The board never writes back to the source records, and a re-synthesized
/// board starts from scratch: reconciling acknowledgements across recomputes
/// is the caller's problem (and an explicit non-goal here).
#[derive(Debug, Clone, Default)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
}

impl AlertBoard {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Mark an alert acknowledged. Returns false if the id is not on the board.
    pub fn acknowledge(&mut self, id: &AlertId) -> bool {
        match self.alerts.iter_mut().find(|a| &a.id == id) {
            Some(alert) => {
                alert.acknowledged = true;
                true
            }
            None => false,
        }
    }

    /// Remove an alert from the board. Returns false if the id is not present.
    pub fn dismiss(&mut self, id: &AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| &a.id != id);
        self.alerts.len() != before
    }

    /// Filtered view, preserving board order.
    pub fn filtered(&self, filter: AlertFilter) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| filter.severity.is_none_or(|s| a.severity == s))
            .filter(|a| filter.include_acknowledged || !a.acknowledged)
            .collect()
    }

    pub fn counts(&self) -> AlertCounts {
        let mut counts = AlertCounts {
            total: self.alerts.len(),
            ..Default::default()
        };
        for alert in self.alerts.iter().filter(|a| !a.acknowledged) {
            counts.total_unacknowledged += 1;
            match alert.severity {
                Severity::Critical => counts.critical_unacknowledged += 1,
                Severity::Warning => counts.warning_unacknowledged += 1,
                Severity::Info => {}
            }
        }
        counts
    }
}
