//! Travel enrichment of nearby terminals.
//!
//! Each candidate gets one routing call, bounded by its own timeout. When
//! the engine fails, times out or finds no route, the candidate falls back
//! to a great-circle estimate. A search never fails because of routing.
//!
//! The fan-out limit is per search. Engines carry no limiter of their own.

use std::time::Duration;

use futures::StreamExt;
use futures::stream;
use tracing::{debug, warn};

use crate::domain::{EnrichedCandidate, GeoPoint, Terminal};
use crate::routing::{RoutingEngine, TravelProfile};

use super::config::SearchConfig;

/// Attaches travel distance and duration to terminals.
pub struct RouteEnricher<R> {
    engine: R,
    fan_out: usize,
    timeout: Duration,
    profile: TravelProfile,
}

impl<R: RoutingEngine + Sync> RouteEnricher<R> {
    pub fn new(engine: R, config: &SearchConfig) -> Self {
        Self {
            engine,
            fan_out: config.fan_out.max(1),
            timeout: config.routing_timeout(),
            profile: config.profile,
        }
    }

    pub fn engine(&self) -> &R {
        &self.engine
    }

    /// Enrich every terminal, preserving input order.
    ///
    /// At most `fan_out` routing calls are in flight at once.
    pub async fn enrich(&self, origin: GeoPoint, terminals: Vec<Terminal>) -> Vec<EnrichedCandidate> {
        if terminals.is_empty() {
            return Vec::new();
        }

        let tasks: Vec<_> = terminals
            .into_iter()
            .map(|terminal| self.enrich_one(origin, terminal))
            .collect();

        let enriched: Vec<EnrichedCandidate> = stream::iter(tasks)
            .buffered(self.fan_out)
            .collect()
            .await;

        debug!(candidates = enriched.len(), "travel enrichment complete");

        enriched
    }

    // The deadline is created on first poll, when the fan-out admits the task.
    async fn enrich_one(&self, origin: GeoPoint, terminal: Terminal) -> EnrichedCandidate {
        let call = self.engine.route(origin, terminal.point, self.profile);

        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(Some(leg))) => EnrichedCandidate::routed(terminal, leg.distance_m, leg.duration_s),
            Ok(Ok(None)) => {
                debug!(terminal = %terminal.id, "no route found, estimating");
                fallback(origin, terminal)
            }
            Ok(Err(e)) => {
                warn!(terminal = %terminal.id, error = %e, "routing failed, estimating");
                fallback(origin, terminal)
            }
            Err(_) => {
                warn!(terminal = %terminal.id, timeout = ?self.timeout, "routing timed out, estimating");
                fallback(origin, terminal)
            }
        }
    }
}

fn fallback(origin: GeoPoint, terminal: Terminal) -> EnrichedCandidate {
    let km = origin.haversine_km(&terminal.point);
    EnrichedCandidate::estimated(terminal, km)
}
