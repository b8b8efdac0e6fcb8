//! Search origin types.

use serde::Serialize;

use super::GeoPoint;

/// Display name used when the caller supplied coordinates directly.
pub const CURRENT_LOCATION: &str = "Current Location";

/// Where a search starts from, before resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum OriginQuery {
    /// Coordinates supplied by the caller.
    ExplicitPoint(GeoPoint),

    /// A free-text place name to geocode.
    NamedPlace {
        text: String,
        region_hint: Option<String>,
    },

    /// Nothing usable was supplied.
    Unspecified,
}

/// A canonical search origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOrigin {
    pub point: GeoPoint,

    /// Human-readable name of the origin.
    pub display_name: String,

    /// Confidence of the source, 1.0 for caller-supplied coordinates.
    pub source_confidence: f64,
}

impl ResolvedOrigin {
    /// Origin taken directly from caller-supplied coordinates.
    pub fn explicit(point: GeoPoint) -> Self {
        Self {
            point,
            display_name: CURRENT_LOCATION.to_string(),
            source_confidence: 1.0,
        }
    }

    /// Origin produced by geocoding.
    ///
    /// Negative or non-finite confidence is clamped to zero.
    pub fn geocoded(point: GeoPoint, display_name: String, confidence: f64) -> Self {
        let source_confidence = if confidence.is_finite() {
            confidence.max(0.0)
        } else {
            0.0
        };

        Self {
            point,
            display_name,
            source_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> GeoPoint {
        GeoPoint::new(9.0, 38.74).unwrap()
    }

    #[test]
    fn explicit_origin_uses_convention() {
        let origin = ResolvedOrigin::explicit(point());
        assert_eq!(origin.display_name, "Current Location");
        assert_eq!(origin.source_confidence, 1.0);
    }

    #[test]
    fn geocoded_confidence_is_clamped() {
        let o = ResolvedOrigin::geocoded(point(), "Bole".into(), 0.42);
        assert_eq!(o.source_confidence, 0.42);

        let o = ResolvedOrigin::geocoded(point(), "Bole".into(), -1.0);
        assert_eq!(o.source_confidence, 0.0);

        let o = ResolvedOrigin::geocoded(point(), "Bole".into(), f64::NAN);
        assert_eq!(o.source_confidence, 0.0);
    }
}
