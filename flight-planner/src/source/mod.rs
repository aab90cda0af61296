//! Flight data source.
//!
//! Flights come from a CSV file with one flight per row and a header naming
//! the columns. Loading is all-or-nothing: the first invalid row aborts it.

mod convert;
mod error;
mod loader;
mod types;

pub use convert::{ConversionError, convert_flight};
pub use error::LoadError;
pub use loader::{load_path, load_reader};
pub use types::RawFlight;
