//! LocationIQ response DTOs.
//!
//! LocationIQ returns coordinates as strings and omits `importance` for
//! some result types, so conversion to [`GeocodeHit`] is fallible.

use serde::Deserialize;

use super::error::GeocodeError;

/// One place from the autocomplete endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    /// Latitude as a decimal string.
    pub lat: String,

    /// Longitude as a decimal string.
    pub lon: String,

    pub display_name: Option<String>,

    /// Provider ranking weight in [0, 1].
    pub importance: Option<f64>,
}

/// A geocoding result.
///
/// Coordinates are raw provider values and are not range-checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
    pub importance: f64,
}

impl TryFrom<PlaceDto> for GeocodeHit {
    type Error = GeocodeError;

    fn try_from(dto: PlaceDto) -> Result<Self, Self::Error> {
        let lat = dto
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodeError::BadCoordinate(dto.lat.clone()))?;
        let lon = dto
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodeError::BadCoordinate(dto.lon.clone()))?;

        Ok(Self {
            lat,
            lon,
            display_name: dto.display_name.unwrap_or_default(),
            importance: dto.importance.unwrap_or(0.0),
        })
    }
}
