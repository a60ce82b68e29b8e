//! Itinerary planner using best-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "Which itineraries take me from here to there, cheapest or fastest first?"
//!
//! The search expands partial itineraries in order of cumulative cost or
//! duration, bounded by a transfer limit and a layover window.

mod config;
mod index;
mod rank;
mod search;


pub use config::{RevisitPolicy, SearchConfig};
pub use index::GraphIndex;
pub use rank::{Criterion, InvalidCriterion, Metric, compare_itineraries, rank_itineraries};
pub use search::{Planner, SearchError, SearchRequest, SearchResult, find_itineraries};
