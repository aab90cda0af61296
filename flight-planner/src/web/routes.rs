//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::AirportCode;
use crate::planner::{Planner, SearchError, SearchRequest, TripSummary};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/airports", get(list_airports))
        .route("/search", get(search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List known airports.
async fn list_airports(State(state): State<AppState>) -> Json<AirportsResponse> {
    let airports = state
        .graph
        .airports()
        .map(AirportCode::as_str)
        .map(str::to_string)
        .collect();

    Json(AirportsResponse {
        airports,
        flights: state.graph.len(),
    })
}

/// Search for trips, cheapest first.
async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<TripSummary>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let request = SearchRequest::from_input(
        &query.origin,
        &query.destination,
        query.bags.unwrap_or(0),
        query.min_stay_days(),
    )?;

    let planner = Planner::new(&state.graph, &state.config);
    let result = planner.search(&request)?;

    debug!(
        origin = %request.origin,
        destination = %request.destination,
        trips = result.trips.len(),
        "served search"
    );

    Ok(Json(result.trips))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(message) => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
