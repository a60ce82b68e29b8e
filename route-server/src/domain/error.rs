//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from catalog I/O and query errors.

use super::LocationCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Leg cost is negative or not a finite number
    #[error("invalid leg cost: {0}")]
    InvalidCost(f64),

    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Consecutive legs don't share a location
    #[error("leg arriving at {0} does not connect to leg departing {1}")]
    LocationsNotConnected(LocationCode, LocationCode),
}
