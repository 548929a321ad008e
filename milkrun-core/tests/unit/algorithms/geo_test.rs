use super::*;
use crate::models::Coordinate;

#[test]
fn can_calculate_distance_between_two_coordinates() {
    let p1 = Coordinate::new(21.1698, 72.8306);
    let p2 = Coordinate::new(21.2, 72.85);

    let distance = get_distance(&p1, &p2);

    assert!((distance - 3.91).abs() < 0.1, "unexpected distance: {distance}");
}

#[test]
fn can_return_zero_distance_for_same_coordinate() {
    let p = Coordinate::new(52.52599, 13.45413);

    assert_eq!(get_distance(&p, &p), 0.);
}

#[test]
fn can_keep_distance_symmetric() {
    let p1 = Coordinate::new(52.52599, 13.45413);
    let p2 = Coordinate::new(52.5165, 13.3808);

    let there = get_distance(&p1, &p2);
    let back = get_distance(&p2, &p1);

    assert!((there - back).abs() < 1E-9);
    assert!((there - 5.06).abs() < 0.1, "unexpected distance: {there}");
}
