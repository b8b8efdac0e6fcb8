//! The end-to-end search pipeline: resolve the origin, find nearby
//! terminals, enrich them with travel figures, and rank.

use tracing::{debug, info};

use crate::catalog::{CatalogError, TerminalIndex};
use crate::domain::{
    EnrichedCandidate, EnrichmentSource, GeoPoint, InvalidPoint, OriginQuery, ResolvedOrigin, RouteOption,
};
use crate::geocode::Geocoder;
use crate::routing::RoutingEngine;

use super::config::SearchConfig;
use super::enrich::RouteEnricher;
use super::proximity::ProximityFinder;
use super::rank::rank_options;
use super::resolve::{GeoResolver, PlaceNotFound};

/// Error from a terminal search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Neither usable coordinates nor a place name were supplied.
    #[error("origin required: provide coordinates or a place name")]
    OriginRequired,

    /// Supplied or geocoded coordinates are out of range.
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidPoint),

    /// Search radius is not a positive finite number.
    #[error("invalid search radius: {0}")]
    InvalidRadius(f64),

    /// The place name could not be geocoded.
    #[error(transparent)]
    PlaceNotFound(#[from] PlaceNotFound),

    /// The terminal catalog could not be queried.
    #[error("terminal catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),
}

/// A terminal search request.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Free-text place name, used when coordinates are absent or invalid.
    pub from: Option<String>,

    /// Region qualifier for geocoding, replacing the default.
    pub region: Option<String>,

    /// Route name filter.
    pub destination: Option<String>,

    /// Search radius in metres.
    pub max_distance_m: Option<f64>,
}

impl SearchRequest {
    /// Search from explicit coordinates.
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    /// Search from a place name.
    pub fn from_place(place: impl Into<String>) -> Self {
        Self {
            from: Some(place.into()),
            ..Self::default()
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_radius(mut self, metres: f64) -> Self {
        self.max_distance_m = Some(metres);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    fn place_text(&self) -> Option<&str> {
        self.from.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Classify the origin.
    ///
    /// Valid coordinates win. Invalid coordinates fall through to the place
    /// name when there is one; otherwise they are an error. A lone latitude
    /// or longitude counts as no coordinates.
    pub fn origin_query(&self) -> Result<OriginQuery, InvalidPoint> {
        let named = self.place_text().map(|text| OriginQuery::NamedPlace {
            text: text.to_string(),
            region_hint: self.region.clone(),
        });

        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => match GeoPoint::new(lat, lon) {
                Ok(point) => Ok(OriginQuery::ExplicitPoint(point)),
                Err(e) => match named {
                    Some(q) => {
                        debug!(error = %e, "ignoring invalid coordinates in favour of place name");
                        Ok(q)
                    }
                    None => Err(e),
                },
            },
            _ => Ok(named.unwrap_or(OriginQuery::Unspecified)),
        }
    }
}

/// Result of a terminal search.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// Every enriched candidate, in proximity order.
    pub results: Vec<EnrichedCandidate>,

    /// Up to three ranked options.
    pub options: Vec<RouteOption>,

    /// The origin the search ran from.
    pub origin: ResolvedOrigin,
}

/// Runs terminal searches.
pub struct SearchOrchestrator<G, I, R> {
    resolver: GeoResolver<G>,
    finder: ProximityFinder<I>,
    enricher: RouteEnricher<R>,
    default_radius_m: f64,
}

impl<G, I, R> SearchOrchestrator<G, I, R>
where
    G: Geocoder + Sync,
    I: TerminalIndex + Sync,
    R: RoutingEngine + Sync,
{
    pub fn new(geocoder: G, index: I, engine: R, config: SearchConfig) -> Self {
        Self {
            resolver: GeoResolver::new(geocoder, &config),
            finder: ProximityFinder::new(index),
            enricher: RouteEnricher::new(engine, &config),
            default_radius_m: config.default_radius_m,
        }
    }

    pub fn geocoder(&self) -> &G {
        self.resolver.geocoder()
    }

    pub fn index(&self) -> &I {
        self.finder.index()
    }

    pub fn engine(&self) -> &R {
        self.enricher.engine()
    }

    /// Run a search.
    ///
    /// Validation happens before any external call. Once the origin is
    /// resolved, routing problems only degrade individual candidates.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let radius_m = request.max_distance_m.unwrap_or(self.default_radius_m);
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(SearchError::InvalidRadius(radius_m));
        }

        let (origin, origin_source) = match request.origin_query()? {
            OriginQuery::ExplicitPoint(point) => (ResolvedOrigin::explicit(point), "coordinates"),
            OriginQuery::NamedPlace { text, region_hint } => {
                let place = self.resolver.resolve(&text, region_hint.as_deref()).await?;
                let origin = place.into_origin().inspect_err(|e| {
                    debug!(place = %text, error = %e, "geocoder returned out-of-range coordinates");
                })?;
                (origin, "geocoded")
            }
            OriginQuery::Unspecified => return Err(SearchError::OriginRequired),
        };

        let terminals = self
            .finder
            .find_near(origin.point, radius_m, request.destination.as_deref())
            .await?;

        let results = self.enricher.enrich(origin.point, terminals).await;
        let options = rank_options(&results);

        let estimated = results
            .iter()
            .filter(|c| c.source == EnrichmentSource::Estimated)
            .count();

        info!(
            origin = %origin.point,
            origin_source,
            from = %origin.display_name,
            radius_m,
            candidates = results.len(),
            estimated,
            options = options.len(),
            "terminal search complete"
        );

        Ok(SearchResponse {
            results,
            options,
            origin,
        })
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
