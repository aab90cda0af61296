//! Flight network adjacency.
//!
//! The graph maps each airport to the flights departing it, in the order the
//! flights were supplied. The planner relies on that order: at every hop it
//! takes the first flight that fits.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::domain::{AirportCode, Flight};

/// Read-only flight network, grouped by departure airport.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    /// Outbound flights per airport, in input order.
    outbound: HashMap<AirportCode, Vec<Arc<Flight>>>,

    /// Every airport seen as an origin or a destination.
    airports: BTreeSet<AirportCode>,

    flight_count: usize,
}

impl FlightGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from flights, keeping their relative order per origin.
    ///
    /// No deduplication or cross-checking is done: a destination that never
    /// appears as an origin simply has no outbound flights.
    pub fn build<I>(flights: I) -> Self
    where
        I: IntoIterator<Item = Flight>,
    {
        let mut graph = Self::new();
        for flight in flights {
            graph.add(flight);
        }
        graph
    }

    /// Append a flight to its origin's outbound list.
    pub fn add(&mut self, flight: Flight) {
        self.airports.insert(flight.origin().clone());
        self.airports.insert(flight.destination().clone());
        self.outbound
            .entry(flight.origin().clone())
            .or_default()
            .push(Arc::new(flight));
        self.flight_count += 1;
    }

    /// Flights departing `airport`, in input order.
    ///
    /// Unknown airports have no flights; this never fails.
    pub fn outbound(&self, airport: &AirportCode) -> &[Arc<Flight>] {
        self.outbound
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All airports seen, sorted.
    pub fn airports(&self) -> impl Iterator<Item = &AirportCode> {
        self.airports.iter()
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn contains_airport(&self, airport: &AirportCode) -> bool {
        self.airports.contains(airport)
    }

    /// Returns the number of flights.
    pub fn len(&self) -> usize {
        self.flight_count
    }

    /// Returns true if there are no flights.
    pub fn is_empty(&self) -> bool {
        self.flight_count == 0
    }
}

impl FromIterator<Flight> for FlightGraph {
    fn from_iter<T: IntoIterator<Item = Flight>>(iter: T) -> Self {
        Self::build(iter)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::FlightTime;
    use proptest::prelude::*;

    proptest! {
        /// Every flight lands in exactly one outbound list, in input order
        #[test]
        fn outbound_lists_partition_input(origins in proptest::collection::vec(0usize..4, 0..30)) {
            let names = ["AAA", "BBB", "CCC", "DDD"];
            let flights: Vec<Flight> = origins
                .iter()
                .enumerate()
                .map(|(i, &o)| {
                    Flight::new(
                        format!("F{i}"),
                        AirportCode::parse(names[o]).unwrap(),
                        AirportCode::parse("ZZZ").unwrap(),
                        FlightTime::parse("2021-09-01T10:00:00").unwrap(),
                        FlightTime::parse("2021-09-01T11:00:00").unwrap(),
                        1.0,
                        1.0,
                        1,
                    )
                    .unwrap()
                })
                .collect();

            let graph = FlightGraph::build(flights);
            prop_assert_eq!(graph.len(), origins.len());

            let mut total = 0;
            for (o, name) in names.iter().enumerate() {
                let list = graph.outbound(&AirportCode::parse(name).unwrap());
                let expected: Vec<String> = origins
                    .iter()
                    .enumerate()
                    .filter(|(_, x)| **x == o)
                    .map(|(i, _)| format!("F{i}"))
                    .collect();
                let actual: Vec<String> = list.iter().map(|f| f.flight_no().to_string()).collect();
                prop_assert_eq!(actual, expected);
                total += list.len();
            }
            prop_assert_eq!(total, origins.len());
        }
    }
}
