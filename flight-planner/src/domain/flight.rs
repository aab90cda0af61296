//! Flight record type.
//!
//! A `Flight` is one scheduled leg between two airports. Flights are built
//! once by the loader and shared as `Arc<Flight>` afterwards, so itineraries
//! can be cloned cheaply while the search branches.

use chrono::Duration;
use serde::Serialize;

use super::{AirportCode, DomainError, FlightTime};

/// A single scheduled flight.
///
/// # Invariants
///
/// - `base_price` and `bag_price` are finite and non-negative
///
/// `arrival > departure` is deliberately not checked: the source data is
/// taken as given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    flight_no: String,
    origin: AirportCode,
    destination: AirportCode,
    departure: FlightTime,
    arrival: FlightTime,
    base_price: f64,
    bag_price: f64,
    bags_allowed: u32,
}

impl Flight {
    /// Construct a flight, validating the prices.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{AirportCode, Flight, FlightTime};
    ///
    /// let flight = Flight::new(
    ///     "ZH214".into(),
    ///     AirportCode::parse("WIW").unwrap(),
    ///     AirportCode::parse("RFZ").unwrap(),
    ///     FlightTime::parse("2021-09-01T23:20:00").unwrap(),
    ///     FlightTime::parse("2021-09-02T03:50:00").unwrap(),
    ///     168.0,
    ///     12.0,
    ///     2,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(flight.price_for_bags(1), 180.0);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_no: String,
        origin: AirportCode,
        destination: AirportCode,
        departure: FlightTime,
        arrival: FlightTime,
        base_price: f64,
        bag_price: f64,
        bags_allowed: u32,
    ) -> Result<Self, DomainError> {
        check_price("base_price", base_price)?;
        check_price("bag_price", bag_price)?;

        Ok(Self {
            flight_no,
            origin,
            destination,
            departure,
            arrival,
            base_price,
            bag_price,
            bags_allowed,
        })
    }

    /// Returns the flight number.
    pub fn flight_no(&self) -> &str {
        &self.flight_no
    }

    /// Returns the departure airport.
    pub fn origin(&self) -> &AirportCode {
        &self.origin
    }

    /// Returns the arrival airport.
    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }

    pub fn departure(&self) -> FlightTime {
        self.departure
    }

    pub fn arrival(&self) -> FlightTime {
        self.arrival
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn bag_price(&self) -> f64 {
        self.bag_price
    }

    /// Returns how many bags may be checked on this flight.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns true if the flight carries at least `bags` bags.
    pub fn accepts_bags(&self, bags: u32) -> bool {
        self.bags_allowed >= bags
    }

    /// Ticket price including `bags` checked bags.
    pub fn price_for_bags(&self, bags: u32) -> f64 {
        self.base_price + self.bag_price * f64::from(bags)
    }

    /// Time in the air (negative if the source data has arrival before departure).
    pub fn duration(&self) -> Duration {
        self.arrival - self.departure
    }
}

fn check_price(field: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidPrice { field, value })
    }
}
