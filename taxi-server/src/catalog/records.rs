//! On-disk catalog format.
//!
//! Terminals are stored as a JSON array of records with a GeoJSON point:
//!
//! ```json
//! [{
//!   "id": "t-001",
//!   "name": "Piassa Terminal",
//!   "location": { "type": "Point", "coordinates": [38.7525, 9.0336] },
//!   "routes": ["Bole", "Megenagna"],
//!   "price": 15
//! }]
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{GeoPoint, Terminal, TerminalId};

use super::error::CatalogError;

/// GeoJSON point. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PointDto {
    #[serde(rename = "type", default = "point_type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

fn point_type() -> String {
    "Point".to_string()
}

/// A catalog record as stored on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TerminalRecord {
    pub id: String,
    pub name: String,
    pub location: PointDto,
    #[serde(default)]
    pub routes: Vec<String>,
    pub price: Option<f64>,
}

impl TryFrom<TerminalRecord> for Terminal {
    type Error = crate::domain::InvalidPoint;

    fn try_from(record: TerminalRecord) -> Result<Self, Self::Error> {
        let [lng, lat] = record.location.coordinates;
        let point = GeoPoint::new(lat, lng)?;

        Ok(Terminal {
            id: TerminalId::new(record.id),
            name: record.name,
            point,
            routes: record.routes,
            price: record.price,
        })
    }
}

/// Parse a catalog document, skipping records with invalid coordinates.
pub fn parse_catalog(json: &str) -> Result<Vec<Terminal>, CatalogError> {
    let records: Vec<TerminalRecord> =
        serde_json::from_str(json).map_err(|e| CatalogError::Json {
            message: e.to_string(),
        })?;

    let mut terminals = Vec::with_capacity(records.len());

    for record in records {
        let id = record.id.clone();
        match Terminal::try_from(record) {
            Ok(terminal) => terminals.push(terminal),
            Err(e) => {
                // Skip bad records rather than failing the whole catalog
                warn!(terminal = %id, error = %e, "skipping catalog record");
            }
        }
    }

    Ok(terminals)
}
