//! Pricing and summarising trips for output.

use serde::Serialize;

use crate::domain::{AirportCode, Flight, Trip, format_hms};

use super::search::SearchRequest;

/// A trip with its derived figures, as handed to renderers.
///
/// Field names and order match the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    /// All flights in travel order (outbound then inbound).
    pub flights: Vec<Flight>,

    /// Bags the whole trip can carry: the smallest allowance of any flight.
    pub bags_allowed: u32,

    /// Bags the traveller asked for.
    pub bags_count: u32,

    /// Requested destination.
    pub destination: AirportCode,

    /// Requested origin.
    pub origin: AirportCode,

    /// Sum of fares including the requested bags.
    pub total_price: f64,

    /// Time in transit as `H:MM:SS`; return trips exclude the stay.
    pub travel_time: String,
}

/// Compute the summary for one trip.
pub fn summarize(trip: &Trip, request: &SearchRequest) -> TripSummary {
    let flights: Vec<Flight> = trip.legs().map(|f| f.as_ref().clone()).collect();

    let total_price: f64 = flights
        .iter()
        .map(|f| f.price_for_bags(request.bags))
        .sum();

    let bags_allowed = flights
        .iter()
        .map(Flight::bags_allowed)
        .min()
        .unwrap_or(0);

    TripSummary {
        flights,
        bags_allowed,
        bags_count: request.bags,
        destination: request.destination.clone(),
        origin: request.origin.clone(),
        total_price,
        travel_time: format_hms(trip.travel_time()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FlightTime, Itinerary};
    use std::sync::Arc;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    #[allow(clippy::too_many_arguments)]
    fn flight(
        no: &str,
        from: &str,
        to: &str,
        dep: &str,
        arr: &str,
        base: f64,
        bag: f64,
        bags: u32,
    ) -> Arc<Flight> {
        Arc::new(
            Flight::new(
                no.into(),
                code(from),
                code(to),
                FlightTime::parse(dep).unwrap(),
                FlightTime::parse(arr).unwrap(),
                base,
                bag,
                bags,
            )
            .unwrap(),
        )
    }

    fn two_leg_trip() -> Trip {
        let a = flight("F1", "AAA", "CCC", "2021-09-01T08:00:00", "2021-09-01T10:00:00", 100.0, 10.0, 2);
        let b = flight("F2", "CCC", "BBB", "2021-09-01T11:30:00", "2021-09-01T13:15:30", 50.0, 5.0, 1);
        Trip::one_way(Itinerary::new(vec![a, b]).unwrap())
    }

    #[test]
    fn one_way_summary() {
        let request = SearchRequest::new(code("AAA"), code("BBB"), 1);
        let summary = summarize(&two_leg_trip(), &request);

        assert_eq!(summary.flights.len(), 2);
        assert_eq!(summary.total_price, 165.0);
        assert_eq!(summary.bags_allowed, 1);
        assert_eq!(summary.bags_count, 1);
        assert_eq!(summary.origin, code("AAA"));
        assert_eq!(summary.destination, code("BBB"));
        assert_eq!(summary.travel_time, "5:15:30");
    }

    #[test]
    fn price_without_bags() {
        let request = SearchRequest::new(code("AAA"), code("BBB"), 0);
        let summary = summarize(&two_leg_trip(), &request);

        assert_eq!(summary.total_price, 150.0);
    }

    #[test]
    fn round_trip_summary_excludes_stay() {
        let out = flight("O", "AAA", "BBB", "2021-09-01T22:00:00", "2021-09-02T01:00:00", 80.0, 8.0, 3);
        let back = flight("B", "BBB", "AAA", "2021-09-05T10:00:00", "2021-09-05T12:30:00", 70.0, 7.0, 2);
        let trip = Trip::round_trip(Itinerary::direct(out), Itinerary::direct(back)).unwrap();

        let request = SearchRequest::new(code("AAA"), code("BBB"), 2).with_return(3);
        let summary = summarize(&trip, &request);

        assert_eq!(summary.total_price, 80.0 + 16.0 + 70.0 + 14.0);
        assert_eq!(summary.bags_allowed, 2);
        assert_eq!(summary.travel_time, "5:30:00");
    }

    #[test]
    fn long_trip_hours_exceed_a_day() {
        let a = flight("F1", "AAA", "BBB", "2021-09-01T08:00:00", "2021-09-02T12:05:09", 1.0, 1.0, 1);
        let request = SearchRequest::new(code("AAA"), code("BBB"), 0);
        let summary = summarize(&Trip::one_way(Itinerary::direct(a)), &request);

        assert_eq!(summary.travel_time, "28:05:09");
    }

    #[test]
    fn json_shape() {
        let request = SearchRequest::new(code("AAA"), code("BBB"), 1);
        let summary = summarize(&two_leg_trip(), &request);
        let json = serde_json::to_value(&summary).unwrap();

        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        let mut expected = vec![
            "bags_allowed",
            "bags_count",
            "destination",
            "flights",
            "origin",
            "total_price",
            "travel_time",
        ];
        let mut keys = keys;
        keys.sort();
        expected.sort();
        assert_eq!(keys, expected);

        assert_eq!(json["flights"][1]["flight_no"], "F2");
        assert_eq!(json["flights"][1]["departure"], "2021-09-01T11:30:00");
        assert_eq!(json["travel_time"], "5:15:30");
    }
}
