//! JSON catalog files.
//!
//! A catalog file lists locations and the legs between them:
//!
//! ```json
//! {
//!   "locations": [
//!     { "code": "KBP", "name": "Kyiv Boryspil", "latitude": 50.345, "longitude": 30.8947 }
//!   ],
//!   "legs": [
//!     { "origin": "KBP", "destination": "LWO", "cost": 120.0,
//!       "departure": "08:00+02:00", "arrival": "09:15+02:00", "category": "A320" }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Catalog, CatalogError};
use crate::domain::{Leg, Location, LocationCode, TimeOfDay};

/// A location entry in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A leg entry in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegRecord {
    /// Origin location code
    pub origin: String,
    /// Destination location code
    pub destination: String,
    pub cost: f64,
    /// Departure time (`HH:MM` with optional offset)
    pub departure: String,
    /// Arrival time (`HH:MM` with optional offset)
    pub arrival: String,
    /// Equipment or vehicle type
    #[serde(default)]
    pub category: String,
}

/// On-disk shape of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub legs: Vec<LegRecord>,
}

impl CatalogFile {
    /// Parse a catalog document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every record and build a catalog.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let mut locations = Vec::with_capacity(self.locations.len());
        let mut by_code: HashMap<LocationCode, Arc<Location>> = HashMap::new();

        for record in self.locations {
            let code = LocationCode::parse(&record.code)?;
            let location = Location::new(code.clone(), record.name, record.latitude, record.longitude)
                .map_err(|source| CatalogError::InvalidLocation {
                    code: code.clone(),
                    source,
                })?;
            let location = Arc::new(location);
            if by_code.insert(code.clone(), location.clone()).is_some() {
                return Err(CatalogError::DuplicateLocation(code));
            }
            locations.push(location);
        }

        let resolve = |raw: &str| -> Result<Arc<Location>, CatalogError> {
            let code = LocationCode::parse(raw)?;
            by_code
                .get(&code)
                .cloned()
                .ok_or(CatalogError::UnknownLocation(code))
        };

        let mut legs = Vec::with_capacity(self.legs.len());
        for (index, record) in self.legs.into_iter().enumerate() {
            let origin = resolve(&record.origin)?;
            let destination = resolve(&record.destination)?;
            let departure = TimeOfDay::parse(&record.departure)
                .map_err(|source| CatalogError::InvalidTime { index, source })?;
            let arrival = TimeOfDay::parse(&record.arrival)
                .map_err(|source| CatalogError::InvalidTime { index, source })?;

            let leg = Leg::new(
                origin,
                destination,
                record.cost,
                departure,
                arrival,
                record.category,
            )
            .map_err(|source| CatalogError::InvalidLeg { index, source })?;
            legs.push(leg);
        }

        Catalog::new(locations, legs)
    }
}

/// Read and validate a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading catalog");

    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = CatalogFile::from_json(&contents)?.into_catalog()?;

    info!(
        path = %path.display(),
        locations = catalog.locations().len(),
        legs = catalog.legs().len(),
        "Loaded catalog"
    );
    Ok(catalog)
}
