//! Scheduled leg type.
//!
//! A `Leg` is one directed, scheduled departure between two locations. It
//! holds its endpoints as `Arc<Location>` so that partial itineraries can be
//! cloned cheaply during search.

use std::sync::Arc;

use chrono::Duration;

use super::{DomainError, Location, LocationCode, TimeOfDay};

/// A single scheduled departure from `origin` to `destination`.
///
/// # Invariants
///
/// - `cost` is finite and non-negative
/// - `duration()` is in `[0, 24h)`; an arrival earlier in the day than the
///   departure lands on the following day
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    origin: Arc<Location>,
    destination: Arc<Location>,
    cost: f64,
    departure: TimeOfDay,
    arrival: TimeOfDay,
    category: String,
}

impl Leg {
    /// Construct a leg, validating its cost.
    ///
    /// The category (e.g. equipment type) is descriptive only. Legs that
    /// start and end at the same location are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use route_server::domain::{Leg, Location, LocationCode, TimeOfDay};
    ///
    /// let kbp = Arc::new(Location::new(LocationCode::parse("KBP").unwrap(), "Kyiv", 50.3, 30.9).unwrap());
    /// let lwo = Arc::new(Location::new(LocationCode::parse("LWO").unwrap(), "Lviv", 49.8, 23.9).unwrap());
    ///
    /// let leg = Leg::new(
    ///     kbp,
    ///     lwo,
    ///     120.0,
    ///     TimeOfDay::parse("23:50").unwrap(),
    ///     TimeOfDay::parse("00:10").unwrap(),
    ///     "A320",
    /// )
    /// .unwrap();
    /// assert_eq!(leg.duration(), chrono::Duration::minutes(20));
    /// ```
    pub fn new(
        origin: Arc<Location>,
        destination: Arc<Location>,
        cost: f64,
        departure: TimeOfDay,
        arrival: TimeOfDay,
        category: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(DomainError::InvalidCost(cost));
        }

        Ok(Leg {
            origin,
            destination,
            cost,
            departure,
            arrival,
            category: category.into(),
        })
    }

    pub fn origin(&self) -> &Arc<Location> {
        &self.origin
    }

    pub fn destination(&self) -> &Arc<Location> {
        &self.destination
    }

    /// Returns the origin location's code.
    pub fn origin_code(&self) -> &LocationCode {
        self.origin.code()
    }

    /// Returns the destination location's code.
    pub fn destination_code(&self) -> &LocationCode {
        self.destination.code()
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn departure_time(&self) -> TimeOfDay {
        self.departure
    }

    pub fn arrival_time(&self) -> TimeOfDay {
        self.arrival
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Time in the air, wrapped into `[0, 24h)`.
    pub fn duration(&self) -> Duration {
        self.departure.wrapped_until(self.arrival)
    }

    /// Great-circle distance between the endpoints in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.origin.distance_km(&self.destination)
    }
}

/// Time between `arriving` landing and `departing` taking off.
///
/// Wraps to the next day when the departure is earlier in the day than the
/// arrival. No minimum or maximum is applied here.
pub fn layover(arriving: &Leg, departing: &Leg) -> Duration {
    arriving.arrival.wrapped_until(departing.departure)
}
