//! Flight itinerary planner server.
//!
//! Loads a catalog of scheduled flight legs and answers: "what are the best
//! ways to get from here to there, by cost or by travel time?"

pub mod catalog;
pub mod domain;
pub mod planner;
pub mod web;
