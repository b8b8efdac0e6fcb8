//! Enriched candidates and ranked route options.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Terminal;

/// Currency used for fares.
pub const CURRENCY: &str = "ETB";

/// Fare range shown when a terminal's price is unknown.
pub const DEFAULT_FARE_RANGE: (u32, u32) = (20, 50);

/// How a candidate's travel figures were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentSource {
    /// Figures come from the routing engine.
    Routed,
    /// Figures come from the great-circle fallback.
    Estimated,
}

/// Round to one decimal place, half away from zero.
pub fn round_km(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

/// A terminal with real-world travel distance and duration from the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedCandidate {
    #[serde(flatten)]
    pub terminal: Terminal,

    /// Travel distance, rounded to one decimal place.
    #[serde(rename = "realDistanceKm")]
    pub travel_distance_km: f64,

    /// Travel duration in whole minutes.
    #[serde(rename = "realDurationMin")]
    pub travel_duration_min: u32,

    #[serde(rename = "enrichmentSource")]
    pub source: EnrichmentSource,
}

impl EnrichedCandidate {
    /// Build a candidate from a routing engine result.
    pub fn routed(terminal: Terminal, distance_m: f64, duration_s: f64) -> Self {
        Self {
            terminal,
            travel_distance_km: round_km(distance_m.max(0.0) / 1000.0),
            travel_duration_min: (duration_s.max(0.0) / 60.0).round() as u32,
            source: EnrichmentSource::Routed,
        }
    }

    /// Build a candidate from a straight-line distance estimate.
    ///
    /// Duration assumes roughly 15 km/h effective urban speed, i.e. four
    /// minutes per kilometre of the unrounded distance.
    pub fn estimated(terminal: Terminal, distance_km: f64) -> Self {
        let distance_km = distance_km.max(0.0);
        Self {
            terminal,
            travel_distance_km: round_km(distance_km),
            travel_duration_min: (distance_km * 4.0).round() as u32,
            source: EnrichmentSource::Estimated,
        }
    }
}

/// Positional label of a ranked option.
///
/// Labels are assigned by rank position only. The second option is always
/// "Nearest Terminal" whether or not it is geographically the nearest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RouteLabel {
    #[serde(rename = "Best Route")]
    BestRoute,
    #[serde(rename = "Nearest Terminal")]
    NearestTerminal,
    #[serde(rename = "Fastest Route")]
    FastestRoute,
}

impl RouteLabel {
    /// Labels in rank order.
    pub const ORDER: [RouteLabel; 3] = [
        RouteLabel::BestRoute,
        RouteLabel::NearestTerminal,
        RouteLabel::FastestRoute,
    ];

    /// Label for a zero-based rank position, if one exists.
    pub fn for_position(position: usize) -> Option<Self> {
        Self::ORDER.get(position).copied()
    }
}

impl fmt::Display for RouteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RouteLabel::BestRoute => "Best Route",
            RouteLabel::NearestTerminal => "Nearest Terminal",
            RouteLabel::FastestRoute => "Fastest Route",
        };
        f.write_str(s)
    }
}

/// Fare shown to the traveller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostEstimate {
    /// The terminal's base price.
    Known(f64),
    /// Open-ended range shown when the price is unknown.
    Range { min: u32, max: u32 },
}

impl CostEstimate {
    /// Display policy: a known positive price, otherwise the default range.
    pub fn for_terminal(terminal: &Terminal) -> Self {
        match terminal.known_price() {
            Some(price) => CostEstimate::Known(price),
            None => CostEstimate::Range {
                min: DEFAULT_FARE_RANGE.0,
                max: DEFAULT_FARE_RANGE.1,
            },
        }
    }
}

impl fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostEstimate::Known(price) => write!(f, "{price} {CURRENCY}"),
            CostEstimate::Range { min, max } => write!(f, "Est. {min}–{max} {CURRENCY}"),
        }
    }
}

impl Serialize for CostEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A ranked, labelled option returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    /// 1-based rank.
    pub rank: usize,

    #[serde(rename = "type")]
    pub label: RouteLabel,

    pub terminal: Terminal,

    pub travel_distance_km: f64,

    pub travel_duration_min: u32,

    pub estimated_cost: CostEstimate,

    pub source: EnrichmentSource,

    /// Composite score; lower is better.
    pub score: f64,
}
