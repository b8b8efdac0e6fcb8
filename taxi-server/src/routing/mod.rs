//! Routing engine client.
//!
//! Provides real road distance and travel time between two points using
//! the OSRM route service.

mod client;
mod error;
mod types;

use std::future::Future;

use crate::domain::GeoPoint;

pub use client::{OsrmClient, OsrmConfig};
pub use error::RoutingError;
pub use types::{RouteLeg, RouteResponse, TravelProfile};

/// A source of point-to-point routes.
///
/// `Ok(None)` means the engine answered but found no route.
pub trait RoutingEngine {
    fn route(
        &self,
        from: GeoPoint,
        to: GeoPoint,
        profile: TravelProfile,
    ) -> impl Future<Output = Result<Option<RouteLeg>, RoutingError>> + Send;
}
