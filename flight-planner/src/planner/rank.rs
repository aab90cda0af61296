//! Ranking for search results.

use std::cmp::Ordering;

use super::summary::TripSummary;

/// Rank trips cheapest first.
///
/// The sort is stable: trips with the same total price keep the order the
/// search produced them in.
pub fn rank_by_price(mut trips: Vec<TripSummary>) -> Vec<TripSummary> {
    trips.sort_by(|a, b| compare_price(a.total_price, b.total_price));
    trips
}

/// Prices are finite, so this never sees NaN. `-0.0` and `0.0`
/// compare equal and keep their order.
fn compare_price(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
