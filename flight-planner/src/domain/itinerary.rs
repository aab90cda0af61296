//! Itinerary and trip types.
//!
//! An `Itinerary` is a connected chain of flights in one direction. A `Trip`
//! is what gets priced and shown: either a single itinerary or an outbound
//! and inbound itinerary joined at the destination.

use std::sync::Arc;

use chrono::Duration;

use super::{AirportCode, DomainError, Flight, FlightTime};

/// A connected sequence of flights from an origin to a destination.
///
/// # Invariants
///
/// - At least one flight
/// - Consecutive flights connect (destination of one = origin of next)
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Arc<Flight>>,
}

impl Itinerary {
    /// Constructs an itinerary from flights in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the list is empty or two consecutive flights do not
    /// share an airport.
    pub fn new(legs: Vec<Arc<Flight>>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in legs.windows(2) {
            let prev_dest = window[0].destination();
            let next_origin = window[1].origin();
            if prev_dest != next_origin {
                return Err(DomainError::LegsNotConnected(
                    prev_dest.clone(),
                    next_origin.clone(),
                ));
            }
        }

        Ok(Self { legs })
    }

    /// A one-flight itinerary.
    pub fn direct(flight: Arc<Flight>) -> Self {
        Self { legs: vec![flight] }
    }

    /// Returns all flights in order.
    pub fn legs(&self) -> &[Arc<Flight>] {
        &self.legs
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    fn first(&self) -> &Flight {
        // Safe: validated non-empty at construction
        &self.legs[0]
    }

    fn last(&self) -> &Flight {
        // Safe: validated non-empty at construction
        &self.legs[self.legs.len() - 1]
    }

    pub fn origin(&self) -> &AirportCode {
        self.first().origin()
    }

    pub fn destination(&self) -> &AirportCode {
        self.last().destination()
    }

    /// Departure time of the first flight.
    pub fn departure_time(&self) -> FlightTime {
        self.first().departure()
    }

    /// Arrival time of the last flight.
    pub fn arrival_time(&self) -> FlightTime {
        self.last().arrival()
    }

    /// Elapsed time from first departure to last arrival.
    pub fn total_duration(&self) -> Duration {
        self.arrival_time() - self.departure_time()
    }
}

/// A bookable trip: a one-way itinerary, or an outbound and inbound
/// itinerary with a stay at the destination in between.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    outbound: Itinerary,
    inbound: Option<Itinerary>,
}

impl Trip {
    /// A one-way trip.
    pub fn one_way(itinerary: Itinerary) -> Self {
        Self {
            outbound: itinerary,
            inbound: None,
        }
    }

    /// A return trip.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the inbound itinerary does not start where the
    /// outbound itinerary ends.
    pub fn round_trip(outbound: Itinerary, inbound: Itinerary) -> Result<Self, DomainError> {
        if outbound.destination() != inbound.origin() {
            return Err(DomainError::LegsNotConnected(
                outbound.destination().clone(),
                inbound.origin().clone(),
            ));
        }

        Ok(Self {
            outbound,
            inbound: Some(inbound),
        })
    }

    pub fn outbound(&self) -> &Itinerary {
        &self.outbound
    }

    pub fn inbound(&self) -> Option<&Itinerary> {
        self.inbound.as_ref()
    }

    pub fn is_round_trip(&self) -> bool {
        self.inbound.is_some()
    }

    /// All flights of the trip in travel order.
    pub fn legs(&self) -> impl Iterator<Item = &Arc<Flight>> {
        self.outbound
            .legs()
            .iter()
            .chain(self.inbound.iter().flat_map(|i| i.legs().iter()))
    }

    /// Time spent at the destination between the two halves, if any.
    pub fn dwell_time(&self) -> Option<Duration> {
        self.inbound
            .as_ref()
            .map(|inbound| inbound.departure_time() - self.outbound.arrival_time())
    }

    /// Time in transit: first departure to last arrival, minus the stay at
    /// the destination for return trips.
    pub fn travel_time(&self) -> Duration {
        match &self.inbound {
            Some(inbound) => {
                let elapsed = inbound.arrival_time() - self.outbound.departure_time();
                elapsed - self.dwell_time().unwrap_or_else(Duration::zero)
            }
            None => self.outbound.total_duration(),
        }
    }
}
