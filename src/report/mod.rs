//! Outcome report for a batch of simulated authorizations.
//!
//! Runs every request through the simulator and compares the observed
//! outcome mix with the configured distribution, so client teams can see
//! what share of their traffic will hit each branch.

use std::collections::BTreeMap;

use crate::models::card::CardNetwork;
use crate::models::outcome::Outcome;
use crate::models::report::{OutcomeMetrics, OutcomeReport};
use crate::models::request::AuthorizationRequest;
use crate::simulator::config::expected_weight;
use crate::simulator::{AuthorizationSimulator, RandomSource};

/// Simulate every request and tally the outcomes.
pub fn generate_report<R>(
    requests: &[AuthorizationRequest],
    simulator: &AuthorizationSimulator<'_>,
    rng: &mut R,
) -> OutcomeReport
where
    R: RandomSource + ?Sized,
{
    let mut counts: BTreeMap<Outcome, usize> = BTreeMap::new();
    let mut by_card_type: BTreeMap<String, usize> =
        CardNetwork::ALL.iter().map(|n| (n.to_string(), 0)).collect();
    let mut card_rejections = 0;

    for request in requests {
        let response = simulator.authorize(request, rng);
        *counts.entry(response.outcome).or_default() += 1;
        *by_card_type.entry(response.card_type.to_string()).or_default() += 1;
        if response.is_card_rejected() {
            card_rejections += 1;
        }
    }

    let total = requests.len();
    let outcomes: Vec<OutcomeMetrics> = Outcome::ALL
        .iter()
        .map(|&outcome| {
            let count = counts.get(&outcome).copied().unwrap_or(0);
            OutcomeMetrics {
                outcome,
                status: outcome.status_code(),
                count,
                rate: percentage(count, total),
                expected_rate: round2(expected_weight(outcome) * 100.0),
            }
        })
        .collect();

    let approved = counts.get(&Outcome::Success).copied().unwrap_or(0);
    OutcomeReport {
        total_requests: total,
        outcomes,
        by_card_type,
        card_rejections,
        approval_rate: percentage(approved, total),
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::get_sample_dataset;
    use crate::models::request::CardDetails;
    use crate::simulator::{FixedDraw, RngSource};
    use crate::templates::ResponseTemplates;

    #[test]
    fn test_counts_add_up() {
        let templates = ResponseTemplates::builtin().unwrap();
        let simulator = AuthorizationSimulator::new(&templates);
        let requests = get_sample_dataset();

        let report = generate_report(&requests, &simulator, &mut RngSource::seeded(42));

        assert_eq!(report.total_requests, 200);
        let outcome_total: usize = report.outcomes.iter().map(|m| m.count).sum();
        assert_eq!(outcome_total, 200);
        let card_total: usize = report.by_card_type.values().sum();
        assert_eq!(card_total, 200);
        assert_eq!(report.by_card_type["UNKNOWN"], 40);
        assert_eq!(report.card_rejections, 40);
    }

    #[test]
    fn test_rejections_are_counted_as_invalid_card() {
        let templates = ResponseTemplates::builtin().unwrap();
        let simulator = AuthorizationSimulator::new(&templates);
        let requests = vec![
            AuthorizationRequest::default(),
            AuthorizationRequest {
                card_details: Some(CardDetails::Raw("4111111111111111".to_string())),
                ..AuthorizationRequest::default()
            },
        ];

        let report = generate_report(&requests, &simulator, &mut FixedDraw(0.0));

        let success = report.metrics(Outcome::Success).unwrap();
        let invalid = report.metrics(Outcome::InvalidCard).unwrap();
        assert_eq!(success.count, 1);
        assert_eq!(invalid.count, 1);
        assert_eq!(invalid.status, 400);
        assert_eq!(report.card_rejections, 1);
        assert_eq!(report.approval_rate, 50.0);
    }

    #[test]
    fn test_long_run_mix_tracks_configured_weights() {
        let templates = ResponseTemplates::builtin().unwrap();
        let simulator = AuthorizationSimulator::new(&templates);
        let request = AuthorizationRequest {
            card_details: Some(CardDetails::Raw("5555555555554444".to_string())),
            ..AuthorizationRequest::default()
        };
        let requests = vec![request; 20_000];

        let report = generate_report(&requests, &simulator, &mut RngSource::seeded(7));

        for metrics in &report.outcomes {
            assert!(
                (metrics.rate - metrics.expected_rate).abs() < 2.0,
                "{} observed {}% vs expected {}%",
                metrics.outcome,
                metrics.rate,
                metrics.expected_rate
            );
        }
    }

    #[test]
    fn test_empty_batch() {
        let templates = ResponseTemplates::builtin().unwrap();
        let simulator = AuthorizationSimulator::new(&templates);

        let report = generate_report(&[], &simulator, &mut FixedDraw(0.5));

        assert_eq!(report.total_requests, 0);
        assert_eq!(report.approval_rate, 0.0);
        assert!(report.outcomes.iter().all(|m| m.count == 0));
    }
}
