//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Origin airport code
    pub origin: String,

    /// Destination airport code
    pub destination: String,

    /// Number of checked bags (negative values count as zero)
    pub bags: Option<i64>,

    /// Whether to search for a return trip
    #[serde(rename = "return")]
    pub round_trip: Option<bool>,

    /// Minimum whole days at the destination (return trips only, default 1)
    pub days_in_destination: Option<u32>,
}

impl SearchQuery {
    /// The minimum stay for a return trip, or `None` for one-way.
    pub fn min_stay_days(&self) -> Option<u32> {
        if self.round_trip.unwrap_or(false) {
            Some(self.days_in_destination.unwrap_or(1))
        } else {
            None
        }
    }
}

/// Response for `GET /airports`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AirportsResponse {
    /// Known airport codes, sorted
    pub airports: Vec<String>,

    /// Number of flights in the graph
    pub flights: usize,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
