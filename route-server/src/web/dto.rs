//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Leg, Location, TimeOfDay};

/// A location in the catalog listing.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    /// Location code (e.g., "KBP")
    pub code: String,

    /// Human-readable name
    pub name: String,

    pub latitude: f64,
    pub longitude: f64,
}

/// Response listing every catalog location.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<LocationResult>,
}

/// Request to search for itineraries.
#[derive(Debug, Deserialize)]
pub struct SearchItinerariesRequest {
    /// Origin location code
    pub origin: String,

    /// Destination location code
    pub destination: String,

    /// "cost" or "duration"
    pub criterion: String,

    /// When the traveller is ready to leave, e.g. "07:00" or "07:00+02:00"
    pub departure_time: String,

    /// Optional criterion to re-rank the results by
    #[serde(default)]
    pub sort_by: Option<String>,
}

/// A leg in an itinerary result.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub origin: String,
    pub destination: String,
    pub category: String,
    pub cost: f64,

    /// Departure time as "HH:MM" (with offset if not UTC)
    pub departure: String,

    /// Arrival time as "HH:MM" (with offset if not UTC)
    pub arrival: String,

    pub duration_mins: i64,
}

/// An itinerary in search results.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    pub legs: Vec<LegResult>,

    /// Waiting time at each connection, in minutes
    pub layovers_mins: Vec<i64>,

    pub total_cost: f64,

    /// Total duration from the query time, in minutes
    pub total_duration_mins: i64,

    /// Number of connections
    pub transfers: usize,

    /// Great-circle distance flown, in kilometres
    pub distance_km: f64,
}

/// Response to an itinerary search.
#[derive(Debug, Serialize)]
pub struct SearchItinerariesResponse {
    pub itineraries: Vec<ItineraryResult>,

    /// Number of partial itineraries the planner examined
    pub paths_explored: usize,

    /// True if the planner stopped early at its expansion limit
    pub truncated: bool,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl LocationResult {
    /// Create from a domain Location.
    pub fn from_location(location: &Location) -> Self {
        Self {
            code: location.code().to_string(),
            name: location.name().to_string(),
            latitude: location.latitude(),
            longitude: location.longitude(),
        }
    }
}

impl LegResult {
    /// Create from a domain Leg.
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            origin: leg.origin_code().to_string(),
            destination: leg.destination_code().to_string(),
            category: leg.category().to_string(),
            cost: leg.cost(),
            departure: leg.departure_time().to_string(),
            arrival: leg.arrival_time().to_string(),
            duration_mins: leg.duration().num_minutes(),
        }
    }
}

impl ItineraryResult {
    /// Create from a domain Itinerary, measuring duration from `query_time`.
    pub fn from_itinerary(itinerary: &Itinerary, query_time: TimeOfDay) -> Self {
        Self {
            legs: itinerary.legs().iter().map(LegResult::from_leg).collect(),
            layovers_mins: itinerary
                .layovers()
                .iter()
                .map(|d| d.num_minutes())
                .collect(),
            total_cost: itinerary.total_cost(),
            total_duration_mins: itinerary.total_duration(query_time).num_minutes(),
            transfers: itinerary.transfer_count(),
            distance_km: itinerary.total_distance_km(),
        }
    }
}
