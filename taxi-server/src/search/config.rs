//! Search configuration for the route pipeline.

use std::time::Duration;

use crate::routing::TravelProfile;

/// Configuration parameters for terminal search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Radius used when the caller does not supply one (metres).
    pub default_radius_m: f64,

    /// Qualifier appended to place names before geocoding, unless the
    /// caller gives a region hint.
    pub default_region: String,

    /// How long to wait for the geocoder (milliseconds).
    pub geocode_timeout_ms: u64,

    /// How long to wait for each routing call (milliseconds).
    /// Calls slower than this fall back to a straight-line estimate.
    pub routing_timeout_ms: u64,

    /// Maximum number of routing calls in flight for one search.
    pub fan_out: usize,

    /// Travel profile requested from the routing engine.
    pub profile: TravelProfile,
}

impl SearchConfig {
    /// Returns the geocoding timeout as a Duration.
    pub fn geocode_timeout(&self) -> Duration {
        Duration::from_millis(self.geocode_timeout_ms)
    }

    /// Returns the per-call routing timeout as a Duration.
    pub fn routing_timeout(&self) -> Duration {
        Duration::from_millis(self.routing_timeout_ms)
    }

    /// Set the default search radius.
    pub fn with_default_radius(mut self, metres: f64) -> Self {
        self.default_radius_m = metres;
        self
    }

    /// Set the region qualifier.
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    /// Set both external call timeouts.
    pub fn with_timeouts(mut self, geocode: Duration, routing: Duration) -> Self {
        self.geocode_timeout_ms = geocode.as_millis() as u64;
        self.routing_timeout_ms = routing.as_millis() as u64;
        self
    }

    /// Set the routing fan-out limit.
    pub fn with_fan_out(mut self, n: usize) -> Self {
        self.fan_out = n;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_m: 5000.0,
            default_region: "Addis Ababa, Ethiopia".to_string(),
            geocode_timeout_ms: 5_000,
            routing_timeout_ms: 6_000,
            fan_out: 8,
            profile: TravelProfile::Driving,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.default_radius_m, 5000.0);
        assert_eq!(config.default_region, "Addis Ababa, Ethiopia");
        assert_eq!(config.geocode_timeout_ms, 5_000);
        assert_eq!(config.routing_timeout_ms, 6_000);
        assert_eq!(config.fan_out, 8);
        assert_eq!(config.profile, TravelProfile::Driving);
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();

        assert_eq!(config.geocode_timeout(), Duration::from_secs(5));
        assert_eq!(config.routing_timeout(), Duration::from_secs(6));
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::default()
            .with_default_radius(2500.0)
            .with_default_region("Adama, Ethiopia")
            .with_timeouts(Duration::from_millis(200), Duration::from_millis(300))
            .with_fan_out(2);

        assert_eq!(config.default_radius_m, 2500.0);
        assert_eq!(config.default_region, "Adama, Ethiopia");
        assert_eq!(config.geocode_timeout_ms, 200);
        assert_eq!(config.routing_timeout_ms, 300);
        assert_eq!(config.fan_out, 2);
    }
}
