//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{EnrichedCandidate, ResolvedOrigin, RouteOption};
use crate::search::{SearchRequest, SearchResponse};

/// Request body for terminal search.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequestDto {
    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    /// Place name to search from when coordinates are absent
    pub from: Option<String>,

    /// Region qualifier for geocoding (e.g. "Adama, Ethiopia")
    pub region: Option<String>,

    /// Route name filter
    pub destination: Option<String>,

    /// Search radius in metres
    #[serde(alias = "maxDistance")]
    pub max_distance_meters: Option<f64>,
}

impl From<SearchRequestDto> for SearchRequest {
    fn from(dto: SearchRequestDto) -> Self {
        SearchRequest {
            latitude: dto.latitude,
            longitude: dto.longitude,
            from: dto.from,
            region: dto.region,
            destination: dto.destination,
            max_distance_m: dto.max_distance_meters,
        }
    }
}

/// Where the search ran from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocationDto {
    pub lat: f64,
    pub lng: f64,
    pub from_name: String,
    pub confidence: f64,
}

impl From<&ResolvedOrigin> for ResolvedLocationDto {
    fn from(origin: &ResolvedOrigin) -> Self {
        Self {
            lat: origin.point.latitude(),
            lng: origin.point.longitude(),
            from_name: origin.display_name.clone(),
            confidence: origin.source_confidence,
        }
    }
}

/// Response body for terminal search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseDto {
    /// Every candidate in proximity order
    pub results: Vec<EnrichedCandidate>,

    /// Up to three ranked options
    pub options: Vec<RouteOption>,

    pub resolved_location: ResolvedLocationDto,
}

impl From<SearchResponse> for SearchResponseDto {
    fn from(response: SearchResponse) -> Self {
        Self {
            resolved_location: ResolvedLocationDto::from(&response.origin),
            results: response.results,
            options: response.options,
        }
    }
}

/// Query for terminal name suggestions.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Search query (partial name)
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Terminal name suggestions.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub names: Vec<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error response.
///
/// `message` repeats `error` for clients that read either key.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: String, suggestion: Option<String>) -> Self {
        Self {
            message: error.clone(),
            error,
            suggestion,
        }
    }
}
