//! Place-name resolution.
//!
//! Turns free text like "Merkato" into coordinates. The provider is asked
//! once; there is no retry, because a vague name will stay vague and the
//! caller is better placed to supply a more specific one.

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{GeoPoint, InvalidPoint, ResolvedOrigin};
use crate::geocode::Geocoder;

use super::config::SearchConfig;

/// Geocoding produced no usable result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not resolve location: \"{place}\"")]
pub struct PlaceNotFound {
    /// The place text as the caller gave it (trimmed).
    pub place: String,
}

/// The provider's best match, before coordinate validation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
    pub confidence: f64,
}

impl GeocodedPlace {
    /// Validate the coordinates and produce a canonical origin.
    pub fn into_origin(self) -> Result<ResolvedOrigin, InvalidPoint> {
        let point = GeoPoint::new(self.lat, self.lon)?;
        Ok(ResolvedOrigin::geocoded(
            point,
            self.display_name,
            self.confidence,
        ))
    }
}

/// Resolves place names through a geocoder.
pub struct GeoResolver<G> {
    geocoder: G,
    default_region: String,
    timeout: Duration,
}

impl<G: Geocoder> GeoResolver<G> {
    pub fn new(geocoder: G, config: &SearchConfig) -> Self {
        Self {
            geocoder,
            default_region: config.default_region.clone(),
            timeout: config.geocode_timeout(),
        }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Build the provider query: the place text plus a regional qualifier.
    pub fn qualify(&self, text: &str, region_hint: Option<&str>) -> String {
        let region = region_hint
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(&self.default_region);
        format!("{}, {}", text.trim(), region)
    }

    /// Resolve `text` to the provider's single best match.
    ///
    /// Provider errors, timeouts and empty answers all produce
    /// `PlaceNotFound`; they differ only in what gets logged.
    pub async fn resolve(
        &self,
        text: &str,
        region_hint: Option<&str>,
    ) -> Result<GeocodedPlace, PlaceNotFound> {
        let place = text.trim();
        let not_found = || PlaceNotFound {
            place: place.to_string(),
        };

        if place.is_empty() {
            return Err(not_found());
        }

        let query = self.qualify(place, region_hint);

        let hits = match tokio::time::timeout(self.timeout, self.geocoder.geocode(&query)).await {
            Ok(Ok(hits)) => hits,
            Ok(Err(e)) => {
                warn!(query = %query, error = %e, "geocoding failed");
                return Err(not_found());
            }
            Err(_) => {
                warn!(query = %query, timeout = ?self.timeout, "geocoding timed out");
                return Err(not_found());
            }
        };

        let Some(best) = hits.into_iter().next() else {
            debug!(query = %query, "geocoder returned no results");
            return Err(not_found());
        };

        let display_name = if best.display_name.trim().is_empty() {
            place.to_string()
        } else {
            best.display_name
        };

        Ok(GeocodedPlace {
            lat: best.lat,
            lon: best.lon,
            display_name,
            confidence: best.importance,
        })
    }
}
