//! Aggregate reporting over a fan-out's outcomes.

use derive_getters::Getters;
use tintoretto_core::{Destination, DestinationOutcome};

/// Summary of one fan-out: who succeeded, who failed, and why.
///
/// # Examples
///
/// ```
/// use tintoretto_core::{Destination, DestinationOutcome};
/// use tintoretto_social::PublishReport;
///
/// let outcomes = vec![
///     DestinationOutcome::success(Destination::Facebook, serde_json::json!({})),
///     DestinationOutcome::failure(Destination::Instagram, "Validation failed"),
/// ];
/// let report = PublishReport::from_outcomes(&outcomes);
/// assert!(!report.all_succeeded());
/// assert!(report.summary().contains("1 of 2"));
/// ```
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct PublishReport {
    /// Number of destinations attempted
    total: usize,
    /// Destinations that accepted the publish
    succeeded: Vec<Destination>,
    /// Destinations that failed, with their reasons
    failed: Vec<(Destination, String)>,
}

impl PublishReport {
    /// Fold a fan-out's outcomes into a report.
    pub fn from_outcomes(outcomes: &[DestinationOutcome]) -> Self {
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        for outcome in outcomes {
            if *outcome.success() {
                succeeded.push(*outcome.destination());
            } else {
                failed.push((
                    *outcome.destination(),
                    outcome
                        .error()
                        .clone()
                        .unwrap_or_else(|| "unknown error".to_string()),
                ));
            }
        }
        Self {
            total: outcomes.len(),
            succeeded,
            failed,
        }
    }

    /// Whether every destination accepted the publish.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty() && self.total > 0
    }

    /// One-line status for display.
    pub fn summary(&self) -> String {
        if self.failed.is_empty() {
            return format!("All {} destinations succeeded", self.total);
        }
        let failures = self
            .failed
            .iter()
            .map(|(destination, reason)| format!("{} ({})", destination, reason))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} of {} destinations succeeded; failed: {}",
            self.succeeded.len(),
            self.total,
            failures
        )
    }
}
