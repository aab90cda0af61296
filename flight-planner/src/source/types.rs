//! Raw flight rows as they appear in the CSV source.
//!
//! Every field is kept as the string found in the file; turning them into
//! domain values is the job of `convert`.

use serde::Deserialize;

/// One data row of the flights CSV, matched to the header by column name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawFlight {
    pub flight_no: String,
    pub origin: String,
    pub destination: String,

    /// `YYYY-MM-DDTHH:MM:SS`
    pub departure: String,

    /// `YYYY-MM-DDTHH:MM:SS`
    pub arrival: String,

    pub base_price: String,
    pub bag_price: String,

    /// Non-negative integer.
    pub bags_allowed: String,
}
