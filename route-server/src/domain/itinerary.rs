//! Itinerary type and cumulative metrics.
//!
//! An `Itinerary` is a chained sequence of legs. Its total cost and total
//! duration are defined by the step functions [`cost_step`] and
//! [`duration_step`]; the planner applies the same steps incrementally so
//! that search order and any later re-sort agree exactly.

use chrono::Duration;

use super::{DomainError, Leg, LocationCode, TimeOfDay, layover};

/// Add one leg's cost to a running total.
pub fn cost_step(total: f64, next: &Leg) -> f64 {
    total + next.cost()
}

/// Add one leg to a running total duration.
///
/// For the first leg (`previous` is `None`) the gap is the wait from
/// `query_time` to its departure; otherwise it is the layover after
/// `previous`. Both gaps wrap past midnight.
pub fn duration_step(
    total: Duration,
    previous: Option<&Leg>,
    next: &Leg,
    query_time: TimeOfDay,
) -> Duration {
    let gap = match previous {
        Some(prev) => layover(prev, next),
        None => query_time.wrapped_until(next.departure_time()),
    };
    total + gap + next.duration()
}

/// A complete trip made of one or more chained legs.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = origin of the next)
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Constructs an itinerary from legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the list is empty or consecutive legs don't connect.
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in legs.windows(2) {
            let prev_dest = window[0].destination_code();
            let next_origin = window[1].origin_code();
            if prev_dest != next_origin {
                return Err(DomainError::LocationsNotConnected(
                    prev_dest.clone(),
                    next_origin.clone(),
                ));
            }
        }

        Ok(Itinerary { legs })
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the number of connections (legs - 1).
    pub fn transfer_count(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }

    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    pub fn origin(&self) -> &LocationCode {
        self.legs[0].origin_code()
    }

    pub fn destination(&self) -> &LocationCode {
        self.legs[self.legs.len() - 1].destination_code()
    }

    /// Layover before each connecting leg, in order.
    pub fn layovers(&self) -> Vec<Duration> {
        self.legs.windows(2).map(|w| layover(&w[0], &w[1])).collect()
    }

    /// Sum of leg costs.
    pub fn total_cost(&self) -> f64 {
        self.legs.iter().fold(0.0, cost_step)
    }

    /// Wait for the first departure plus all leg and layover durations.
    pub fn total_duration(&self, query_time: TimeOfDay) -> Duration {
        let mut total = Duration::zero();
        let mut previous = None;
        for leg in &self.legs {
            total = duration_step(total, previous, leg, query_time);
            previous = Some(leg);
        }
        total
    }

    /// Sum of great-circle leg distances in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.legs.iter().map(Leg::distance_km).sum()
    }

    /// Location codes visited, joined with `-` (e.g. `KBP-LWO-ODS`).
    pub fn route_key(&self) -> String {
        let mut key = self.origin().as_str().to_string();
        for leg in &self.legs {
            key.push('-');
            key.push_str(leg.destination_code().as_str());
        }
        key
    }
}
