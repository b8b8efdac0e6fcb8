//! Ranking of enriched candidates.
//!
//! Candidates are scored by a weighted sum of travel distance, travel time
//! and fare; the lowest three scores become the presented options.

use crate::domain::{CostEstimate, EnrichedCandidate, RouteLabel, RouteOption};

/// Weight of travel distance (km) in the score.
pub const DISTANCE_WEIGHT: f64 = 0.4;

/// Weight of travel duration (minutes) in the score.
pub const DURATION_WEIGHT: f64 = 0.4;

/// Weight of the base price in the score. Unknown prices count as zero.
pub const PRICE_WEIGHT: f64 = 0.2;

/// Composite score of a candidate. Lower is better.
pub fn score(candidate: &EnrichedCandidate) -> f64 {
    let price = candidate.terminal.known_price().unwrap_or(0.0);

    DISTANCE_WEIGHT * candidate.travel_distance_km
        + DURATION_WEIGHT * f64::from(candidate.travel_duration_min)
        + PRICE_WEIGHT * price
}

/// Rank candidates and keep the best three as labelled options.
///
/// Equal scores keep their input order, which is proximity order.
pub fn rank_options(candidates: &[EnrichedCandidate]) -> Vec<RouteOption> {
    let mut scored: Vec<(f64, &EnrichedCandidate)> =
        candidates.iter().map(|c| (score(c), c)).collect();

    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    scored
        .into_iter()
        .zip(RouteLabel::ORDER)
        .enumerate()
        .map(|(i, ((score, c), label))| RouteOption {
            rank: i + 1,
            label,
            terminal: c.terminal.clone(),
            travel_distance_km: c.travel_distance_km,
            travel_duration_min: c.travel_duration_min,
            estimated_cost: CostEstimate::for_terminal(&c.terminal),
            source: c.source,
            score,
        })
        .collect()
}
