#[cfg(test)]
#[path = "../../tests/unit/algorithms/geo_test.rs"]
mod geo_test;

use crate::models::{Coordinate, Distance};

/// A mean Earth radius in kilometers.
const EARTH_RADIUS_KM: Distance = 6371.;

/// Gets great-circle distance in kilometers between two coordinates using haversine formula.
///
/// The function expects latitude in `[-90, 90]` and longitude in `[-180, 180]` degrees and does
/// not validate its input: out of range coordinates are caller responsibility.
pub fn get_distance(p1: &Coordinate, p2: &Coordinate) -> Distance {
    let d_lat = degree_rad(p2.lat - p1.lat);
    let d_lng = degree_rad(p2.lng - p1.lng);

    let lat1 = degree_rad(p1.lat);
    let lat2 = degree_rad(p2.lat);

    let a =
        (d_lat / 2.).sin() * (d_lat / 2.).sin() + (d_lng / 2.).sin() * (d_lng / 2.).sin() * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.
}
