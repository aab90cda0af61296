//! Pairing outbound and inbound itineraries into return trips.

use tracing::{debug, trace};

use crate::domain::{Itinerary, Trip, whole_days};

/// Combine every outbound itinerary with every inbound itinerary that leaves
/// the destination at least `min_stay_days` whole days after the outbound
/// one lands.
///
/// Days are counted as elapsed 24-hour periods, not calendar dates: landing
/// at 10:00 and leaving three days later at 09:59 is a stay of two days.
///
/// Unlike the one-way search this is a full cross product. Trips come out
/// in outbound-major order.
pub fn pair_round_trips(
    outbound: &[Itinerary],
    inbound: &[Itinerary],
    min_stay_days: u32,
) -> Vec<Trip> {
    let mut trips = Vec::new();

    if outbound.is_empty() || inbound.is_empty() {
        return trips;
    }

    let min_stay = i64::from(min_stay_days);

    for there in outbound {
        for back in inbound {
            let stay = back.departure_time() - there.arrival_time();
            if whole_days(stay) < min_stay {
                continue;
            }

            match Trip::round_trip(there.clone(), back.clone()) {
                Ok(trip) => trips.push(trip),
                Err(e) => trace!(error = %e, "skipping unconnected pair"),
            }
        }
    }

    debug!(
        outbound = outbound.len(),
        inbound = inbound.len(),
        paired = trips.len(),
        min_stay_days,
        "round trips paired"
    );

    trips
}
