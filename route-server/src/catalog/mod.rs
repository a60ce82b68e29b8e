//! Leg catalogs.
//!
//! A `Catalog` is the set of locations and scheduled legs a search runs
//! against. It is always passed explicitly; nothing here is global.

mod error;
mod file;

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Leg, Location, LocationCode};

pub use error::CatalogError;
pub use file::{CatalogFile, LegRecord, LocationRecord, load_catalog};

/// Locations and the legs between them.
///
/// # Invariants
///
/// - Location codes are unique
/// - Every leg's origin and destination is a registered location
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locations: Vec<Arc<Location>>,
    by_code: HashMap<LocationCode, usize>,
    legs: Vec<Leg>,
}

impl Catalog {
    /// Build a catalog, checking that legs only refer to known locations.
    pub fn new(locations: Vec<Arc<Location>>, legs: Vec<Leg>) -> Result<Self, CatalogError> {
        let mut by_code = HashMap::with_capacity(locations.len());
        for (idx, location) in locations.iter().enumerate() {
            if by_code.insert(location.code().clone(), idx).is_some() {
                return Err(CatalogError::DuplicateLocation(location.code().clone()));
            }
        }

        for leg in &legs {
            for code in [leg.origin_code(), leg.destination_code()] {
                if !by_code.contains_key(code) {
                    return Err(CatalogError::UnknownLocation(code.clone()));
                }
            }
        }

        Ok(Self {
            locations,
            by_code,
            legs,
        })
    }

    /// Returns all locations in registration order.
    pub fn locations(&self) -> &[Arc<Location>] {
        &self.locations
    }

    /// Returns all legs in catalog order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Look up a location by code.
    pub fn location(&self, code: &LocationCode) -> Option<&Arc<Location>> {
        self.by_code.get(code).map(|&idx| &self.locations[idx])
    }

    pub fn contains(&self, code: &LocationCode) -> bool {
        self.by_code.contains_key(code)
    }

    /// Returns true if there are no legs to search.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeOfDay;

    fn location(code: &str) -> Arc<Location> {
        Arc::new(
            Location::new(LocationCode::parse(code).unwrap(), code, 10.0, 20.0).unwrap(),
        )
    }

    fn leg(from: &Arc<Location>, to: &Arc<Location>) -> Leg {
        Leg::new(
            from.clone(),
            to.clone(),
            10.0,
            TimeOfDay::parse("08:00").unwrap(),
            TimeOfDay::parse("09:00").unwrap(),
            "A320",
        )
        .unwrap()
    }

    #[test]
    fn build_and_lookup() {
        let a = location("A");
        let b = location("B");
        let catalog = Catalog::new(vec![a.clone(), b.clone()], vec![leg(&a, &b)]).unwrap();

        assert_eq!(catalog.locations().len(), 2);
        assert_eq!(catalog.legs().len(), 1);
        assert!(!catalog.is_empty());
        assert!(catalog.contains(a.code()));
        assert_eq!(catalog.location(b.code()).map(|l| l.name()), Some("B"));
        assert!(catalog.location(&LocationCode::parse("C").unwrap()).is_none());
    }

    #[test]
    fn duplicate_location_rejected() {
        let result = Catalog::new(vec![location("A"), location("A")], vec![]);
        assert!(matches!(result, Err(CatalogError::DuplicateLocation(c)) if c.as_str() == "A"));
    }

    #[test]
    fn leg_to_unknown_location_rejected() {
        let a = location("A");
        let b = location("B");
        let result = Catalog::new(vec![a.clone()], vec![leg(&a, &b)]);
        assert!(matches!(result, Err(CatalogError::UnknownLocation(c)) if c.as_str() == "B"));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.locations().is_empty());
    }
}
