//! Outcome distribution for classified cards.
//!
//! A single uniform draw in `[0, 1)` is partitioned into four half-open
//! bands. Bands are stored by their upper bound rather than by weight so the
//! boundaries are exact and do not depend on floating-point sums.

use crate::models::outcome::Outcome;

/// Upper bound (exclusive) of each band, in draw order. Draws at or above
/// the last bound fall through to [`FALLTHROUGH_OUTCOME`].
pub const OUTCOME_BANDS: [(Outcome, f64); 3] = [
    (Outcome::Success, 0.60),
    (Outcome::InvalidCard, 0.77),
    (Outcome::InsufficientFunds, 0.94),
];

/// Outcome for draws at or above the last band.
pub const FALLTHROUGH_OUTCOME: Outcome = Outcome::InternalError;

/// Weighted outcome, derived from the bands.
#[derive(Debug, Clone)]
pub struct OutcomeWeight {
    pub outcome: Outcome,
    pub weight: f64,
}

/// Maps a draw to its outcome.
pub fn outcome_for_draw(draw: f64) -> Outcome {
    OUTCOME_BANDS
        .iter()
        .find(|(_, upper)| draw < *upper)
        .map(|(outcome, _)| *outcome)
        .unwrap_or(FALLTHROUGH_OUTCOME)
}

/// Returns the probability of each outcome for a classified card.
pub fn get_outcome_distribution() -> Vec<OutcomeWeight> {
    let mut lower = 0.0;
    let mut weights = Vec::with_capacity(OUTCOME_BANDS.len() + 1);
    for (outcome, upper) in OUTCOME_BANDS {
        weights.push(OutcomeWeight { outcome, weight: upper - lower });
        lower = upper;
    }
    weights.push(OutcomeWeight { outcome: FALLTHROUGH_OUTCOME, weight: 1.0 - lower });
    weights
}

/// Configured probability of a single outcome.
pub fn expected_weight(outcome: Outcome) -> f64 {
    get_outcome_distribution()
        .into_iter()
        .find(|w| w.outcome == outcome)
        .map_or(0.0, |w| w.weight)
}
