//! Terminal search pipeline.
//!
//! This module answers: "I am here (or somewhere I can name), which taxi
//! terminals should I walk to?"
//!
//! A search resolves the origin, finds terminals within a radius, asks the
//! routing engine for real travel figures to each, and ranks the result.
//! Only origin resolution can fail the search; routing problems degrade
//! individual candidates to straight-line estimates.

mod config;
mod enrich;
mod orchestrator;
mod proximity;
mod rank;
mod resolve;

pub use config::SearchConfig;
pub use enrich::RouteEnricher;
pub use orchestrator::{SearchError, SearchOrchestrator, SearchRequest, SearchResponse};
pub use proximity::{ProximityFinder, normalize_filter};
pub use rank::{rank_options, score};
pub use resolve::{GeoResolver, GeocodedPlace, PlaceNotFound};
