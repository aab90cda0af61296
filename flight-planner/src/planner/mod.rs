//! Itinerary planner using depth-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "Which flights get me from here to there, with my bags, and what does it
//! cost?"
//!
//! One-way itineraries are found by a depth-first walk over the flight graph.
//! Return trips pair an outbound and an inbound search. Every trip is then
//! priced and the results are ranked cheapest first.

mod config;
mod rank;
mod round_trip;
mod search;
mod summary;

pub use config::{SearchConfig, SearchStrategy};
pub use rank::rank_by_price;
pub use round_trip::pair_round_trips;
pub use search::{
    MAX_STAY_DAYS, MIN_STAY_DAYS, Planner, SearchError, SearchRequest, SearchResult, clamp_bags,
};
pub use summary::{TripSummary, summarize};
