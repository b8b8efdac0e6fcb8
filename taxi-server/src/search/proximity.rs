//! Radius search over the terminal index.

use tracing::debug;

use crate::catalog::{CatalogError, TerminalIndex};
use crate::domain::{GeoPoint, Terminal};

/// Normalize a destination filter: trimmed, and `None` when blank.
pub fn normalize_filter(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|f| !f.is_empty())
}

/// Finds terminals near an origin.
pub struct ProximityFinder<I> {
    index: I,
}

impl<I: TerminalIndex> ProximityFinder<I> {
    pub fn new(index: I) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Terminals within `radius_m` of `point`, nearest first.
    ///
    /// The filter is re-applied to whatever the index returns, so an index
    /// that matches more loosely cannot leak unrelated terminals.
    pub async fn find_near(
        &self,
        point: GeoPoint,
        radius_m: f64,
        filter: Option<&str>,
    ) -> Result<Vec<Terminal>, CatalogError> {
        let filter = normalize_filter(filter);

        let mut terminals = self.index.find_within(point, radius_m, filter).await?;

        if let Some(f) = filter {
            terminals.retain(|t| t.serves(f));
        }

        debug!(%point, radius_m, found = terminals.len(), "proximity search");

        Ok(terminals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TerminalCatalog;
    use crate::domain::TerminalId;

    fn terminal(id: &str, lat: f64, routes: &[&str]) -> Terminal {
        Terminal {
            id: TerminalId::new(id),
            name: id.to_string(),
            point: GeoPoint::new(lat, 38.74).unwrap(),
            routes: routes.iter().map(|r| (*r).to_string()).collect(),
            price: None,
        }
    }

    /// Index that ignores the filter entirely.
    struct LooseIndex(Vec<Terminal>);

    impl TerminalIndex for LooseIndex {
        async fn find_within(
            &self,
            _point: GeoPoint,
            _radius_m: f64,
            _route_filter: Option<&str>,
        ) -> Result<Vec<Terminal>, CatalogError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn blank_filter_is_none() {
        assert_eq!(normalize_filter(None), None);
        assert_eq!(normalize_filter(Some("   ")), None);
        assert_eq!(normalize_filter(Some(" Bole ")), Some("Bole"));
    }

    #[tokio::test]
    async fn filter_is_reapplied_to_index_results() {
        let finder = ProximityFinder::new(LooseIndex(vec![
            terminal("a", 9.0, &["Bole"]),
            terminal("b", 9.0, &["Piassa"]),
        ]));

        let origin = GeoPoint::new(9.0, 38.74).unwrap();
        let hits = finder.find_near(origin, 1000.0, Some(" bole ")).await.unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "a");
    }

    #[tokio::test]
    async fn whitespace_filter_matches_everything() {
        let catalog = TerminalCatalog::from_terminals(vec![
            terminal("a", 9.001, &["Bole"]),
            terminal("b", 9.002, &["Piassa"]),
        ]);
        let finder = ProximityFinder::new(catalog);

        let origin = GeoPoint::new(9.0, 38.74).unwrap();
        let hits = finder.find_near(origin, 1000.0, Some("  ")).await.unwrap();

        assert_eq!(hits.len(), 2);
    }
}
