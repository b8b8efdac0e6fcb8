//! Geocoding provider client.
//!
//! Turns free-text place descriptions into coordinates using LocationIQ.
//!
//! Key characteristics of the provider:
//! - Coordinates come back as decimal **strings**
//! - A query with no match is reported as HTTP 404, not an empty array
//! - Results are already ranked best-first

mod client;
mod error;
mod types;

use std::future::Future;

pub use client::{GeocodeConfig, LocationIqClient};
pub use error::GeocodeError;
pub use types::{GeocodeHit, PlaceDto};

/// A source of geocoding results.
///
/// Implementations return hits best-first. An empty vector means the
/// provider found nothing.
pub trait Geocoder {
    fn geocode(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<GeocodeHit>, GeocodeError>> + Send;
}
