//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedGeocoder;
use crate::catalog::TerminalCatalog;
use crate::geocode::LocationIqClient;
use crate::routing::OsrmClient;
use crate::search::SearchOrchestrator;

/// The production search pipeline.
pub type TerminalSearch = SearchOrchestrator<CachedGeocoder<LocationIqClient>, TerminalCatalog, OsrmClient>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Search pipeline
    pub search: Arc<TerminalSearch>,

    /// Terminal catalog, shared with the pipeline, for name suggestions
    pub catalog: TerminalCatalog,
}

impl AppState {
    /// Create a new app state.
    ///
    /// The catalog handle shares storage with the pipeline's index, so a
    /// reload through either is visible to both.
    pub fn new(search: TerminalSearch) -> Self {
        let catalog = search.index().clone();
        Self {
            search: Arc::new(search),
            catalog,
        }
    }
}
