//! Flight itinerary planner.
//!
//! Loads a table of scheduled flights, then answers: "how can I get from
//! here to there, and back again, with this many bags, and what will it
//! cost?" Results are one-way or return trips, cheapest first.

pub mod domain;
pub mod graph;
pub mod logging;
pub mod planner;
pub mod source;
pub mod web;
