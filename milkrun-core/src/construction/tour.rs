#[cfg(test)]
#[path = "../../tests/unit/construction/tour_test.rs"]
mod tour_test;

use crate::algorithms::geo::get_distance;
use crate::models::{Distance, Located};

/// Builds a visiting order over given stops using a greedy nearest neighbor strategy: the first
/// stop stays fixed as the tour start, then the closest unvisited stop to the last added one is
/// appended until no stops remain. Equidistant candidates are resolved in favor of the earlier
/// stop in input order.
///
/// The result is a permutation of the input with the same length and an unchanged first element.
/// An input with less than two stops is returned unchanged. The heuristic runs in `O(n²)` and
/// does not guarantee a minimal total distance.
pub fn create_tour<T: Located>(mut stops: Vec<T>) -> Vec<T> {
    if stops.len() < 2 {
        return stops;
    }

    let mut tour = Vec::with_capacity(stops.len());

    let start = stops.remove(0);
    let mut origin = start.coordinate();
    tour.push(start);

    while !stops.is_empty() {
        let mut nearest_idx = 0;
        let mut nearest_distance = Distance::INFINITY;

        for (idx, stop) in stops.iter().enumerate() {
            let distance = get_distance(&origin, &stop.coordinate());
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest_idx = idx;
            }
        }

        let next = stops.remove(nearest_idx);
        origin = next.coordinate();
        tour.push(next);
    }

    tour
}

/// Gets total great-circle length of an ordered tour in kilometers. A tour with less than two
/// stops has zero length.
pub fn get_tour_distance<T: Located>(tour: &[T]) -> Distance {
    tour.windows(2).map(|leg| get_distance(&leg[0].coordinate(), &leg[1].coordinate())).sum()
}
