//! Application state for the web layer.

use std::sync::Arc;

use crate::graph::FlightGraph;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The graph is loaded once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Flight network
    pub graph: Arc<FlightGraph>,

    /// Planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: FlightGraph, config: SearchConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
        }
    }
}
