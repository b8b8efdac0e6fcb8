//! Terminal catalog and geospatial index.
//!
//! The catalog is owned outside this service; it is loaded from a JSON file
//! at startup and reloaded periodically. Searches only ever read it.

mod error;
mod index;
mod records;

use std::future::Future;

use crate::domain::{GeoPoint, Terminal};

pub use error::CatalogError;
pub use index::TerminalCatalog;
pub use records::{PointDto, TerminalRecord, parse_catalog};

/// A geospatial index of terminals.
///
/// Results are ordered by increasing straight-line distance from `point`.
pub trait TerminalIndex {
    fn find_within(
        &self,
        point: GeoPoint,
        radius_m: f64,
        route_filter: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Terminal>, CatalogError>> + Send;
}
