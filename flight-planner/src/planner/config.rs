//! Search configuration for the itinerary planner.

use chrono::Duration;

use super::search::SearchError;

/// How many itineraries to collect per starting flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Follow only the first eligible connection at each airport. Yields at
    /// most one itinerary per flight leaving the origin, and may miss routes
    /// when that first connection dead-ends.
    #[default]
    FirstMatch,

    /// Branch over every eligible connection and keep every completed route.
    Exhaustive,
}

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Shortest allowed layover between flights (minutes, inclusive).
    pub min_layover_mins: i64,

    /// Longest allowed layover between flights (minutes, inclusive).
    pub max_layover_mins: i64,

    /// Connection enumeration policy.
    pub strategy: SearchStrategy,
}

/// Layovers of a full day or more are never accepted.
const LAYOVER_CEILING_HOURS: i64 = 24;

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_layover_mins: i64, max_layover_mins: i64, strategy: SearchStrategy) -> Self {
        Self {
            min_layover_mins,
            max_layover_mins,
            strategy,
        }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::minutes(self.max_layover_mins)
    }

    /// Check whether a gap between an arrival and the next departure is a
    /// usable connection.
    ///
    /// The gap must be non-negative, under 24 hours, and inside the closed
    /// `[min_layover, max_layover]` window.
    pub fn accepts_layover(&self, gap: Duration) -> bool {
        gap >= Duration::zero()
            && gap < Duration::hours(LAYOVER_CEILING_HOURS)
            && gap >= self.min_layover()
            && gap <= self.max_layover()
    }

    /// Reject a window no layover could fit: a negative minimum, or a
    /// minimum above the maximum.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.min_layover_mins < 0 {
            return Err(SearchError::InvalidRequest(
                "minimum layover must not be negative".to_string(),
            ));
        }

        if self.min_layover_mins > self.max_layover_mins {
            return Err(SearchError::InvalidRequest(format!(
                "minimum layover ({} min) exceeds maximum layover ({} min)",
                self.min_layover_mins, self.max_layover_mins
            )));
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: 60,
            max_layover_mins: 360, // 6 hours
            strategy: SearchStrategy::FirstMatch,
        }
    }
}
