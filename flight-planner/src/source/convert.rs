//! Conversion from raw CSV rows to domain types.

use crate::domain::{AirportCode, DomainError, Flight, FlightTime, InvalidAirportCode, TimeError};

use super::types::RawFlight;

/// Error during row to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Origin or destination is not a usable airport code
    #[error("{field}: {source}")]
    InvalidAirport {
        field: &'static str,
        source: InvalidAirportCode,
    },

    /// Timestamp not in `YYYY-MM-DDTHH:MM:SS` form
    #[error("{field}: {source}")]
    InvalidTime {
        field: &'static str,
        source: TimeError,
    },

    /// Price is not a decimal number
    #[error("{field} should be a decimal number, got {value:?}")]
    InvalidPrice { field: &'static str, value: String },

    /// Bag allowance is not a non-negative integer
    #[error("bags_allowed should be a non-negative integer, got {0:?}")]
    InvalidBags(String),

    /// Values parsed but do not form a valid flight
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Convert a raw row into a flight.
///
/// Fails on the first field that does not parse.
pub fn convert_flight(raw: &RawFlight) -> Result<Flight, ConversionError> {
    let origin = parse_airport("origin", &raw.origin)?;
    let destination = parse_airport("destination", &raw.destination)?;
    let departure = parse_time("departure", &raw.departure)?;
    let arrival = parse_time("arrival", &raw.arrival)?;
    let base_price = parse_price("base_price", &raw.base_price)?;
    let bag_price = parse_price("bag_price", &raw.bag_price)?;
    let bags_allowed = raw
        .bags_allowed
        .parse::<u32>()
        .map_err(|_| ConversionError::InvalidBags(raw.bags_allowed.clone()))?;

    Ok(Flight::new(
        raw.flight_no.clone(),
        origin,
        destination,
        departure,
        arrival,
        base_price,
        bag_price,
        bags_allowed,
    )?)
}

fn parse_airport(field: &'static str, value: &str) -> Result<AirportCode, ConversionError> {
    AirportCode::parse(value).map_err(|source| ConversionError::InvalidAirport { field, source })
}

fn parse_time(field: &'static str, value: &str) -> Result<FlightTime, ConversionError> {
    FlightTime::parse(value).map_err(|source| ConversionError::InvalidTime { field, source })
}

fn parse_price(field: &'static str, value: &str) -> Result<f64, ConversionError> {
    value
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidPrice {
            field,
            value: value.to_string(),
        })
}
