//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from loading and request errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A price is negative, infinite or not a number
    #[error("{field} must be a non-negative amount, got {value}")]
    InvalidPrice { field: &'static str, value: f64 },

    /// Consecutive legs don't share an airport
    #[error("flight arriving at {0} does not connect to flight departing {1}")]
    LegsNotConnected(AirportCode, AirportCode),

    /// Itinerary has no legs
    #[error("itinerary must have at least one flight")]
    EmptyItinerary,
}
