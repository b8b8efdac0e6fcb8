//! Domain types for taxi terminal search.
//!
//! All types enforce their invariants at construction time, so code that
//! receives a `GeoPoint` or a `RouteOption` can trust its validity.

mod candidate;
mod origin;
mod point;
mod terminal;

pub use candidate::{
    CURRENCY, CostEstimate, DEFAULT_FARE_RANGE, EnrichedCandidate, EnrichmentSource, RouteLabel,
    RouteOption, round_km,
};
pub use origin::{CURRENT_LOCATION, OriginQuery, ResolvedOrigin};
pub use point::{GeoPoint, InvalidPoint};
pub use terminal::{Terminal, TerminalId};
