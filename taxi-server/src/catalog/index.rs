//! In-memory geospatial terminal index.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{GeoPoint, Terminal};

use super::TerminalIndex;
use super::error::CatalogError;
use super::records::parse_catalog;

/// Minimum query length for name suggestions.
const MIN_SUGGEST_LEN: usize = 2;

/// Thread-safe terminal catalog.
///
/// Answers radius queries ordered by straight-line distance, with support
/// for background reload from the catalog file.
#[derive(Clone)]
pub struct TerminalCatalog {
    inner: Arc<RwLock<Vec<Terminal>>>,
    source: Option<PathBuf>,
}

impl TerminalCatalog {
    /// Load a catalog from a JSON file.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let terminals = read_catalog(&path).await?;

        Ok(Self {
            inner: Arc::new(RwLock::new(terminals)),
            source: Some(path),
        })
    }

    /// Create a catalog from terminals already in memory.
    ///
    /// Such a catalog has no backing file and cannot be reloaded.
    pub fn from_terminals(terminals: Vec<Terminal>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(terminals)),
            source: None,
        }
    }

    /// Get the number of terminals.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Re-read the catalog file.
    ///
    /// On success, replaces the current contents. On failure, the existing
    /// contents are preserved and the error is returned.
    pub async fn reload(&self) -> Result<usize, CatalogError> {
        let Some(path) = &self.source else {
            return Ok(self.len().await);
        };

        let terminals = read_catalog(path).await?;
        let count = terminals.len();

        let mut guard = self.inner.write().await;
        *guard = terminals;

        Ok(count)
    }

    /// Terminals within `radius_m` of `point`, nearest first.
    ///
    /// Ties keep catalog order. When `route_filter` is given, only
    /// terminals serving a matching route are returned.
    pub async fn within(
        &self,
        point: GeoPoint,
        radius_m: f64,
        route_filter: Option<&str>,
    ) -> Vec<Terminal> {
        let guard = self.inner.read().await;

        let mut hits: Vec<(f64, &Terminal)> = guard
            .iter()
            .filter(|t| route_filter.is_none_or(|f| t.serves(f)))
            .map(|t| (point.haversine_m(&t.point), t))
            .filter(|(d, _)| *d <= radius_m)
            .collect();

        // sort_by is stable, so equal distances keep catalog order
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));

        debug!(
            %point,
            radius_m,
            filter = route_filter.unwrap_or(""),
            hits = hits.len(),
            "catalog radius query"
        );

        hits.into_iter().map(|(_, t)| t.clone()).collect()
    }

    /// Terminal names containing `query`, ignoring case, for type-ahead.
    ///
    /// Queries shorter than two characters return nothing.
    pub async fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_SUGGEST_LEN {
            return Vec::new();
        }

        let guard = self.inner.read().await;
        guard
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&query))
            .take(limit)
            .map(|t| t.name.clone())
            .collect()
    }
}

impl TerminalIndex for TerminalCatalog {
    async fn find_within(
        &self,
        point: GeoPoint,
        radius_m: f64,
        route_filter: Option<&str>,
    ) -> Result<Vec<Terminal>, CatalogError> {
        Ok(self.within(point, radius_m, route_filter).await)
    }
}

async fn read_catalog(path: &Path) -> Result<Vec<Terminal>, CatalogError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_catalog(&json)
}
