//! Search configuration for the itinerary planner.

use chrono::Duration;

/// Which locations an itinerary may not fly back into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisitPolicy {
    /// Only the itinerary's origin is excluded as a next destination.
    /// Intermediate locations may appear more than once.
    #[default]
    OriginOnly,

    /// No location may appear twice in an itinerary.
    NoRepeat,
}

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of connections (an itinerary has at most this + 1 legs).
    pub max_transfers: usize,

    /// Maximum number of itineraries to return.
    pub max_routes: usize,

    /// Minimum layover between connecting legs (minutes).
    pub min_transfer_mins: i64,

    /// Maximum layover between connecting legs (minutes).
    pub max_transfer_mins: i64,

    /// Which locations a partial itinerary may not revisit.
    pub revisit: RevisitPolicy,

    /// Maximum number of partial itineraries popped from the frontier.
    /// The search stops early and reports truncation when this is reached.
    pub max_expansions: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_transfers: usize,
        max_routes: usize,
        min_transfer_mins: i64,
        max_transfer_mins: i64,
        revisit: RevisitPolicy,
        max_expansions: usize,
    ) -> Self {
        Self {
            max_transfers,
            max_routes,
            min_transfer_mins,
            max_transfer_mins,
            revisit,
            max_expansions,
        }
    }

    /// Returns the maximum number of legs in an itinerary.
    pub fn max_legs(&self) -> usize {
        self.max_transfers + 1
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_transfer(&self) -> Duration {
        Duration::minutes(self.min_transfer_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_transfer(&self) -> Duration {
        Duration::minutes(self.max_transfer_mins)
    }

    /// Returns true if a layover falls inside the allowed window (inclusive).
    pub fn layover_allowed(&self, layover: Duration) -> bool {
        layover >= self.min_transfer() && layover <= self.max_transfer()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_transfers: 3,
            max_routes: 10,
            min_transfer_mins: 30,
            max_transfer_mins: 240, // 4 hours
            revisit: RevisitPolicy::OriginOnly,
            max_expansions: 100_000,
        }
    }
}
