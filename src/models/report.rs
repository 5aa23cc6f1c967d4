use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::outcome::Outcome;

/// Tally of a batch of simulated authorizations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeReport {
    /// Total number of requests simulated.
    pub total_requests: usize,
    /// Per-outcome counts, in `Outcome::ALL` order.
    pub outcomes: Vec<OutcomeMetrics>,
    /// Requests per classified card type (`VISA`, ..., `UNKNOWN`).
    pub by_card_type: BTreeMap<String, usize>,
    /// Requests rejected before the draw (missing or unrecognised card).
    pub card_rejections: usize,
    /// Share of all requests that were approved, as a percentage (0.0–100.0).
    pub approval_rate: f64,
}

/// Counts for one outcome within a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeMetrics {
    pub outcome: Outcome,
    /// HTTP status the outcome is reported with.
    pub status: u16,
    /// Number of requests that ended in this outcome.
    pub count: usize,
    /// Share of all requests, as a percentage.
    pub rate: f64,
    /// Configured share among classified cards, as a percentage.
    pub expected_rate: f64,
}

impl OutcomeReport {
    /// Looks up the metrics for one outcome.
    pub fn metrics(&self, outcome: Outcome) -> Option<&OutcomeMetrics> {
        self.outcomes.iter().find(|m| m.outcome == outcome)
    }
}
