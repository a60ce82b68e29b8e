//! Domain types for the itinerary planner.
//!
//! This module contains the core value types: locations, scheduled legs and
//! itineraries, together with the time-of-day arithmetic they share. All
//! types enforce their invariants at construction time.

mod error;
mod itinerary;
pub(crate) mod leg;
mod location;
mod time;

pub use error::DomainError;
pub use itinerary::{Itinerary, cost_step, duration_step};
pub use leg::{Leg, layover};
pub use location::{InvalidLocation, InvalidLocationCode, Location, LocationCode};
pub use time::{TimeError, TimeOfDay};
