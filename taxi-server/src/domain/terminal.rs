//! Taxi terminal types.

use std::fmt;

use serde::Serialize;

use super::GeoPoint;

/// Catalog identifier of a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TerminalId(String);

impl TerminalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TerminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A taxi terminal from the catalog.
///
/// Terminals are owned by the catalog and are read-only to the search
/// pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Terminal {
    pub id: TerminalId,

    pub name: String,

    /// Terminal location.
    #[serde(rename = "location")]
    pub point: GeoPoint,

    /// Names of the routes served from this terminal, in catalog order.
    pub routes: Vec<String>,

    /// Base fare, if the catalog knows it.
    pub price: Option<f64>,
}

impl Terminal {
    /// Whether any served route contains `filter`, ignoring case.
    ///
    /// The filter is matched as a literal substring, so a partial
    /// destination name still matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use taxi_server::domain::{GeoPoint, Terminal, TerminalId};
    ///
    /// let terminal = Terminal {
    ///     id: TerminalId::new("t1"),
    ///     name: "Piassa".to_string(),
    ///     point: GeoPoint::new(9.03, 38.75).unwrap(),
    ///     routes: vec!["Bole Medhanialem".to_string()],
    ///     price: None,
    /// };
    ///
    /// assert!(terminal.serves("bole"));
    /// assert!(terminal.serves("MEDHANI"));
    /// assert!(!terminal.serves("Mexico"));
    /// ```
    pub fn serves(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.routes
            .iter()
            .any(|route| route.to_lowercase().contains(&needle))
    }

    /// The base price, if known and positive.
    pub fn known_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(routes: &[&str], price: Option<f64>) -> Terminal {
        Terminal {
            id: TerminalId::new("t1"),
            name: "Test".to_string(),
            point: GeoPoint::new(9.0, 38.74).unwrap(),
            routes: routes.iter().map(|r| (*r).to_string()).collect(),
            price,
        }
    }

    #[test]
    fn serves_is_case_insensitive_substring() {
        let t = terminal(&["Bole", "Megenagna"], None);
        assert!(t.serves("bole"));
        assert!(t.serves("BOLE"));
        assert!(t.serves("gena"));
        assert!(!t.serves("Mercato"));
    }

    #[test]
    fn serves_matches_broadly() {
        // Short filters match several routes; this breadth is intended.
        let t = terminal(&["Mercato"], None);
        assert!(t.serves("me"));
        let t = terminal(&["Mexico"], None);
        assert!(t.serves("me"));
    }

    #[test]
    fn serves_treats_metacharacters_literally() {
        let t = terminal(&["Bole (Airport)"], None);
        assert!(t.serves("(airport)"));
        assert!(!t.serves("b.le"));
    }

    #[test]
    fn no_routes_serves_nothing() {
        let t = terminal(&[], None);
        assert!(!t.serves("bole"));
    }

    #[test]
    fn known_price_requires_positive() {
        assert_eq!(terminal(&[], Some(15.0)).known_price(), Some(15.0));
        assert_eq!(terminal(&[], Some(0.0)).known_price(), None);
        assert_eq!(terminal(&[], Some(-3.0)).known_price(), None);
        assert_eq!(terminal(&[], None).known_price(), None);
    }
}
