//! Reading the flight graph from CSV.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::graph::FlightGraph;

use super::convert::convert_flight;
use super::error::LoadError;
use super::types::RawFlight;

/// Load a flight graph from a CSV file.
pub fn load_path(path: &Path) -> Result<FlightGraph, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = load_reader(file)?;

    info!(
        path = %path.display(),
        flights = graph.len(),
        airports = graph.airport_count(),
        "loaded flights"
    );

    Ok(graph)
}

/// Load a flight graph from CSV data with a header row.
///
/// Columns are matched by name, so their order does not matter. The first
/// bad row aborts the load; no partial graph is returned.
pub fn load_reader<R: Read>(reader: R) -> Result<FlightGraph, LoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = FlightGraph::new();

    for (idx, result) in csv.deserialize::<RawFlight>().enumerate() {
        let row = idx + 1;
        let raw = result?;
        let flight = convert_flight(&raw).map_err(|source| LoadError::Record { row, source })?;
        graph.add(flight);
    }

    debug!(flights = graph.len(), "parsed flights CSV");

    Ok(graph)
}
