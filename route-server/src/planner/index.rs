//! Origin index over a leg catalog.
//!
//! Search repeatedly asks "which legs leave this location?". The index
//! answers that in O(1) by grouping catalog positions by origin code, keeping
//! catalog order within each group so that later tie-breaking is stable.

use std::collections::HashMap;

use crate::domain::{Leg, LocationCode};

/// Legs grouped by origin, borrowing the catalog they were built from.
#[derive(Debug)]
pub struct GraphIndex<'a> {
    legs: &'a [Leg],
    departures: HashMap<&'a LocationCode, Vec<usize>>,
}

impl<'a> GraphIndex<'a> {
    /// Build the index from a flat list of legs.
    pub fn build(legs: &'a [Leg]) -> Self {
        let mut departures: HashMap<&'a LocationCode, Vec<usize>> = HashMap::new();
        for (idx, leg) in legs.iter().enumerate() {
            departures.entry(leg.origin_code()).or_default().push(idx);
        }
        Self { legs, departures }
    }

    /// Catalog positions of legs leaving `origin`, in catalog order.
    pub fn departures_from(&self, origin: &LocationCode) -> &[usize] {
        self.departures
            .get(origin)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The leg at a catalog position.
    pub fn leg(&self, idx: usize) -> &'a Leg {
        &self.legs[idx]
    }
}
