//! Web layer for the flight planner.
//!
//! Serves searches over HTTP against a graph loaded at startup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
