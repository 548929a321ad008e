use super::*;
use crate::helpers::create_test_address;

/// A provider stub which knows a single city and echoes requested stops back as a path.
struct StaticProvider;

impl GeocodingProvider for StaticProvider {
    fn geocode(&self, address: &str) -> Result<Coordinate, ProviderError> {
        match address {
            "city light, surat" => Ok(Coordinate::new(21.1698, 72.8306)),
            _ => Err(ProviderError::new("ZERO_RESULTS")),
        }
    }
}

impl DirectionsProvider for StaticProvider {
    fn route(&self, request: &DirectionsRequest) -> Result<Directions, ProviderError> {
        let mut path = vec![request.origin];
        path.extend(request.waypoints.iter().copied());
        path.push(request.destination);

        Ok(Directions { path })
    }
}

#[test]
fn can_split_tour_into_directions_request() {
    let tour = vec![
        create_test_address(1, 0., 0.),
        create_test_address(2, 1., 1.),
        create_test_address(3, 2., 2.),
        create_test_address(4, 3., 3.),
    ];

    let request = DirectionsRequest::from_tour(&tour).expect("expected a request");

    assert_eq!(request.origin, Coordinate::new(0., 0.));
    assert_eq!(request.destination, Coordinate::new(3., 3.));
    assert_eq!(request.waypoints, vec![Coordinate::new(1., 1.), Coordinate::new(2., 2.)]);
    assert!(request.optimize_waypoints);
}

#[test]
fn can_skip_directions_request_for_short_tours() {
    let empty: Vec<Coordinate> = Default::default();
    assert_eq!(DirectionsRequest::from_tour(&empty), None);
    assert_eq!(DirectionsRequest::from_tour(&[Coordinate::new(1., 1.)]), None);

    let pair = [Coordinate::new(1., 1.), Coordinate::new(2., 2.)];
    let request = DirectionsRequest::from_tour(&pair).expect("expected a request");
    assert!(request.waypoints.is_empty());
}

#[test]
fn can_serialize_directions_request() {
    let tour = [Coordinate::new(0., 0.), Coordinate::new(1., 1.), Coordinate::new(2., 2.)];
    let request = DirectionsRequest::from_tour(&tour).expect("expected a request");

    let json = serde_json::to_value(&request).expect("cannot serialize request");

    assert_eq!(
        json,
        serde_json::json!({
            "origin": { "lat": 0., "lng": 0. },
            "destination": { "lat": 2., "lng": 2. },
            "waypoints": [{ "lat": 1., "lng": 1. }],
            "optimize_waypoints": true
        })
    );
}

#[test]
fn can_geocode_known_address() {
    let coordinate = StaticProvider.geocode("city light, surat").expect("expected a coordinate");

    assert_eq!(coordinate, Coordinate::new(21.1698, 72.8306));
}

#[test]
fn can_report_provider_status_on_failure() {
    let error = StaticProvider.geocode("nowhere").expect_err("expected a failure");

    assert_eq!(error, ProviderError::new("ZERO_RESULTS"));
    assert_eq!(error.to_string(), "provider request failed with status 'ZERO_RESULTS'");
}

#[test]
fn can_route_along_requested_stops() {
    let tour =
        vec![create_test_address(1, 0., 0.), create_test_address(2, 1., 1.), create_test_address(3, 2., 2.)];
    let request = DirectionsRequest::from_tour(&tour).expect("expected a request");

    let directions = StaticProvider.route(&request).expect("expected directions");

    assert_eq!(directions.path.len(), tour.len());
    assert_eq!(directions.path.first(), Some(&Coordinate::new(0., 0.)));
    assert_eq!(directions.path.last(), Some(&Coordinate::new(2., 2.)));
}
