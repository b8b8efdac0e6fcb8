//! OSRM response DTOs.

use std::fmt;

use serde::Deserialize;

/// Response from `route/v1/{profile}/{coordinates}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    /// "Ok" on success, otherwise an error code such as "NoRoute".
    pub code: String,

    /// Human-readable error message, present when `code` is not "Ok".
    pub message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<RouteDto>,
}

/// A single route. Only the totals are used.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    /// Metres.
    pub distance: f64,

    /// Seconds.
    pub duration: f64,
}

/// Travel distance and time of the best route between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLeg {
    pub distance_m: f64,
    pub duration_s: f64,
}

impl RouteResponse {
    /// The best route, if the engine found one.
    pub fn best_leg(&self) -> Option<RouteLeg> {
        if self.code != "Ok" {
            return None;
        }
        self.routes
            .first()
            .filter(|r| r.distance.is_finite() && r.duration.is_finite())
            .map(|r| RouteLeg {
                distance_m: r.distance,
                duration_s: r.duration,
            })
    }
}

/// OSRM travel profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelProfile {
    #[default]
    Driving,
    Walking,
}

impl TravelProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelProfile::Driving => "driving",
            TravelProfile::Walking => "walking",
        }
    }
}

impl fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
