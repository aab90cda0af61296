//! Depth-first itinerary search.
//!
//! Finds routes from an origin airport to a destination through the flight
//! graph, respecting the layover window and the requested bag count.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{AirportCode, Flight, Itinerary, Trip};
use crate::graph::FlightGraph;

use super::config::{SearchConfig, SearchStrategy};
use super::rank::rank_by_price;
use super::round_trip::pair_round_trips;
use super::summary::{TripSummary, summarize};

/// Shortest stay allowed for a return trip, in days.
pub const MIN_STAY_DAYS: u32 = 1;

/// Longest minimum stay a return trip may ask for, in days.
pub const MAX_STAY_DAYS: u32 = 31;

/// Error from itinerary search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Request for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Where the trip starts.
    pub origin: AirportCode,

    /// Where the trip goes.
    pub destination: AirportCode,

    /// Checked bags every flight must accept.
    pub bags: u32,

    /// For return trips, the minimum whole days to stay at the destination.
    pub min_stay_days: Option<u32>,
}

impl SearchRequest {
    /// Create a one-way request. A negative bag count is treated as zero.
    pub fn new(origin: AirportCode, destination: AirportCode, bags: i64) -> Self {
        Self {
            origin,
            destination,
            bags: clamp_bags(bags),
            min_stay_days: None,
        }
    }

    /// Build and validate a request from user input.
    ///
    /// Airport codes are trimmed but otherwise matched exactly as stored in
    /// the graph; a negative bag count is treated as zero.
    pub fn from_input(
        origin: &str,
        destination: &str,
        bags: i64,
        min_stay_days: Option<u32>,
    ) -> Result<Self, SearchError> {
        let origin = AirportCode::parse_trimmed(origin)
            .map_err(|e| SearchError::InvalidRequest(format!("origin: {e}")))?;
        let destination = AirportCode::parse_trimmed(destination)
            .map_err(|e| SearchError::InvalidRequest(format!("destination: {e}")))?;

        let mut request = Self::new(origin, destination, bags);
        request.min_stay_days = min_stay_days;
        request.validate()?;

        Ok(request)
    }

    /// Turn this into a return trip with at least `days` at the destination.
    pub fn with_return(mut self, days: u32) -> Self {
        self.min_stay_days = Some(days);
        self
    }

    pub fn is_round_trip(&self) -> bool {
        self.min_stay_days.is_some()
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origin == self.destination {
            return Err(SearchError::InvalidRequest(format!(
                "origin and destination are both {}",
                self.origin
            )));
        }

        if let Some(days) = self.min_stay_days {
            if !(MIN_STAY_DAYS..=MAX_STAY_DAYS).contains(&days) {
                return Err(SearchError::InvalidRequest(format!(
                    "days in destination must be between {MIN_STAY_DAYS} and {MAX_STAY_DAYS}, got {days}"
                )));
            }
        }

        Ok(())
    }
}

/// Convert a user-supplied bag count, treating negative values as zero.
pub fn clamp_bags(bags: i64) -> u32 {
    u32::try_from(bags.max(0)).unwrap_or(u32::MAX)
}

/// Result of itinerary search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Priced trips, cheapest first.
    pub trips: Vec<TripSummary>,

    /// Number of one-way itineraries found towards the destination.
    pub outbound_found: usize,

    /// Number of one-way itineraries found back to the origin (return trips only).
    pub inbound_found: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            trips: Vec::new(),
            outbound_found: 0,
            inbound_found: 0,
        }
    }
}

/// DFS state during search.
#[derive(Debug, Clone)]
struct SearchState {
    /// Current airport.
    airport: AirportCode,

    /// Flights taken so far.
    legs: Vec<Arc<Flight>>,

    /// Airports already passed through (the current one excluded).
    visited: HashSet<AirportCode>,
}

impl SearchState {
    /// State after taking `flight` out of the origin.
    fn start(flight: &Arc<Flight>) -> Self {
        let mut visited = HashSet::new();
        visited.insert(flight.origin().clone());

        Self {
            airport: flight.destination().clone(),
            legs: vec![flight.clone()],
            visited,
        }
    }

    /// Check if we've reached the destination.
    fn at_destination(&self, destination: &AirportCode) -> bool {
        &self.airport == destination
    }

    /// True if `airport` already appears on the route, current stop included.
    fn has_visited(&self, airport: &AirportCode) -> bool {
        airport == &self.airport || self.visited.contains(airport)
    }

    fn last_leg(&self) -> &Flight {
        // Safe: states are only created with at least one leg
        &self.legs[self.legs.len() - 1]
    }

    /// A new branch continuing with `flight`. `self` is left untouched.
    fn extend(&self, flight: &Arc<Flight>) -> Self {
        let mut visited = self.visited.clone();
        visited.insert(self.airport.clone());

        let mut legs = self.legs.clone();
        legs.push(flight.clone());

        Self {
            airport: flight.destination().clone(),
            legs,
            visited,
        }
    }

    /// Build an itinerary from the current state.
    fn to_itinerary(&self) -> Option<Itinerary> {
        Itinerary::new(self.legs.clone()).ok()
    }
}

/// Itinerary planner over a fixed flight graph.
pub struct Planner<'a> {
    graph: &'a FlightGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a FlightGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search for trips matching the request, priced and ranked cheapest first.
    ///
    /// An unreachable destination is not an error; it gives an empty result.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;
        self.config.validate()?;

        let outbound =
            self.find_itineraries(&request.origin, &request.destination, request.bags);
        let outbound_found = outbound.len();

        let (trips, inbound_found) = match request.min_stay_days {
            None => (outbound.into_iter().map(Trip::one_way).collect(), 0),
            Some(days) => {
                let inbound =
                    self.find_itineraries(&request.destination, &request.origin, request.bags);
                let inbound_found = inbound.len();
                (pair_round_trips(&outbound, &inbound, days), inbound_found)
            }
        };

        let summaries: Vec<TripSummary> = trips
            .iter()
            .map(|trip| summarize(trip, request))
            .collect();

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            bags = request.bags,
            outbound_found,
            inbound_found,
            trips = summaries.len(),
            "search complete"
        );

        Ok(SearchResult {
            trips: rank_by_price(summaries),
            outbound_found,
            inbound_found,
        })
    }

    /// Find one-way itineraries from `origin` to `destination` on flights that
    /// all accept `bags` checked bags.
    ///
    /// Every flight leaving `origin` with enough bag capacity starts one
    /// depth-first walk. With [`SearchStrategy::FirstMatch`] each walk follows
    /// only the first connection (in graph order) that fits at every airport,
    /// so it yields at most one itinerary; walks that dead-end yield nothing.
    /// With [`SearchStrategy::Exhaustive`] every fitting connection is tried.
    ///
    /// Results are grouped by starting flight, in graph order.
    pub fn find_itineraries(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        bags: u32,
    ) -> Vec<Itinerary> {
        let mut itineraries = Vec::new();

        for flight in self.graph.outbound(origin) {
            if !flight.accepts_bags(bags) {
                continue;
            }
            // A flight back into the origin would revisit it
            if flight.destination() == origin {
                continue;
            }

            let state = SearchState::start(flight);

            match self.config.strategy {
                SearchStrategy::FirstMatch => {
                    if let Some(itinerary) = self.follow_first(state, destination, bags) {
                        itineraries.push(itinerary);
                    }
                }
                SearchStrategy::Exhaustive => {
                    self.follow_all(state, destination, bags, &mut itineraries);
                }
            }
        }

        trace!(
            origin = %origin,
            destination = %destination,
            found = itineraries.len(),
            "one-way search done"
        );

        itineraries
    }

    /// Continue a walk using only the first fitting connection at each hop.
    fn follow_first(
        &self,
        state: SearchState,
        destination: &AirportCode,
        bags: u32,
    ) -> Option<Itinerary> {
        if state.at_destination(destination) {
            return state.to_itinerary();
        }

        let next = self.connections(&state, bags).next()?;
        self.follow_first(state.extend(next), destination, bags)
    }

    /// Continue a walk down every fitting connection, collecting each route
    /// that reaches the destination.
    fn follow_all(
        &self,
        state: SearchState,
        destination: &AirportCode,
        bags: u32,
        found: &mut Vec<Itinerary>,
    ) {
        if state.at_destination(destination) {
            found.extend(state.to_itinerary());
            return;
        }

        for next in self.connections(&state, bags) {
            self.follow_all(state.extend(next), destination, bags, found);
        }
    }

    /// Flights out of the state's airport that can be connected to, in
    /// graph order.
    fn connections<'s>(
        &'s self,
        state: &'s SearchState,
        bags: u32,
    ) -> impl Iterator<Item = &'a Arc<Flight>> + 's {
        let arrival = state.last_leg().arrival();

        self.graph
            .outbound(&state.airport)
            .iter()
            .filter(move |next| {
                let fits = !state.has_visited(next.destination())
                    && self.config.accepts_layover(next.departure() - arrival)
                    && next.accepts_bags(bags);

                trace!(
                    airport = %state.airport,
                    flight = next.flight_no(),
                    fits,
                    "considering connection"
                );

                fits
            })
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
