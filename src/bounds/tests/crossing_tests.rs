//! Tests for boundary crossing along a segment

extern crate std;

use super::test_utils::assert_on_segment;
use crate::bounds::{BoundaryEdge, Bounds};
use crate::coordinate::{Enu, Lla, PlanarPoint};
use crate::errors::BoundsError;

fn enu(east: f64, north: f64) -> Enu {
    Enu::new(east, north, 0.0)
}

fn lla(lon: f64, lat: f64) -> Lla {
    Lla::from_planar(lon, lat)
}

fn square() -> Bounds<Enu> {
    Bounds::new(0.0, 0.0, 10.0, 10.0)
}

#[test]
fn test_crossing_lies_on_boundary_and_segment() {
    let bounds = square();
    let inside = enu(5.0, 5.0);
    let outside = enu(15.0, 8.0);

    let crossing = bounds.find_boundary_crossing(&inside, &outside).unwrap();
    std::assert_eq!(crossing, enu(10.0, 6.5));
    std::assert!(bounds.contains(&crossing));
    std::assert!(bounds.on_boundary(&crossing));
    assert_on_segment(&inside, &outside, &crossing);
}

#[test]
fn test_each_edge() {
    let bounds = square();
    let inside = enu(5.0, 5.0);

    let cases = [
        (enu(-5.0, 5.0), BoundaryEdge::MinX, enu(0.0, 5.0)),
        (enu(20.0, 5.0), BoundaryEdge::MaxX, enu(10.0, 5.0)),
        (enu(5.0, -5.0), BoundaryEdge::MinY, enu(5.0, 0.0)),
        (enu(5.0, 20.0), BoundaryEdge::MaxY, enu(5.0, 10.0)),
    ];

    for (outside, expected_edge, expected_point) in cases {
        let (edge, point) = bounds.find_boundary_crossing_edge(&inside, &outside).unwrap();
        std::assert_eq!(edge, expected_edge);
        std::assert_eq!(point, expected_point);
    }
}

#[test]
fn test_endpoint_order_does_not_matter() {
    let bounds = square();
    let inside = enu(2.0, 3.0);
    let outside = enu(-2.0, 9.0);

    let forward = bounds.find_boundary_crossing(&inside, &outside).unwrap();
    let backward = bounds.find_boundary_crossing(&outside, &inside).unwrap();
    std::assert_eq!(forward, enu(0.0, 6.0));
    std::assert_eq!(backward, forward);
}

#[test]
fn test_corner_tie_break_prefers_x_edges() {
    let bounds = square();

    let (edge, point) = bounds.find_boundary_crossing_edge(&enu(5.0, 5.0), &enu(15.0, 15.0)).unwrap();
    std::assert_eq!(edge, BoundaryEdge::MaxX);
    std::assert_eq!(point, enu(10.0, 10.0));

    let (edge, point) = bounds.find_boundary_crossing_edge(&enu(5.0, 5.0), &enu(-5.0, -5.0)).unwrap();
    std::assert_eq!(edge, BoundaryEdge::MinX);
    std::assert_eq!(point, enu(0.0, 0.0));
}

#[test]
fn test_rejected_candidate_falls_through() {
    let bounds = square();
    // Line reaches max_x at y = 25, outside, so the max_y edge is used
    let (edge, point) = bounds.find_boundary_crossing_edge(&enu(5.0, 5.0), &enu(11.0, 29.0)).unwrap();
    std::assert_eq!(edge, BoundaryEdge::MaxY);
    std::assert_eq!(point.north, 10.0);
    std::assert!((point.east - 6.25).abs() < 1e-12);
}

#[test]
fn test_crossing_is_deterministic() {
    let bounds: Bounds<Lla> = Bounds::new(-3.3, 1.7, 12.9, 8.1);
    let p1 = lla(0.123456789, 2.987654321);
    let p2 = lla(19.7, 11.3);

    let first = bounds.find_boundary_crossing(&p1, &p2).unwrap();
    for _ in 0..10 {
        let again = bounds.find_boundary_crossing(&p1, &p2).unwrap();
        std::assert_eq!(again.lon.to_bits(), first.lon.to_bits());
        std::assert_eq!(again.lat.to_bits(), first.lat.to_bits());
    }
}

#[test]
fn test_degenerate_segment_fails() {
    let bounds = square();
    let point = enu(5.0, 5.0);

    let result = bounds.find_boundary_crossing(&point, &point);
    std::assert!(matches!(result, Err(BoundsError::BoundaryNotFound { .. })));
}

#[test]
fn test_segment_entirely_outside_fails() {
    let bounds = square();
    let result = bounds.find_boundary_crossing(&enu(-5.0, 20.0), &enu(20.0, 30.0));
    std::assert!(matches!(result, Err(BoundsError::BoundaryNotFound { .. })));
}

#[test]
fn test_local_box_never_takes_seam_branch() {
    let bounds: Bounds<Enu> = Bounds::new(-10.0, -10.0, 10.0, 10.0);
    let (edge, point) = bounds.find_boundary_crossing_edge(&enu(-5.0, 0.0), &enu(20.0, 0.0)).unwrap();
    std::assert_eq!(edge, BoundaryEdge::MaxX);
    std::assert_eq!(point, enu(10.0, 0.0));
}

#[test]
fn test_seam_crossing_leaving_through_max_x() {
    let bounds: Bounds<Lla> = Bounds::new(170.0, -10.0, -170.0, 10.0);
    let inside = lla(175.0, 0.0);
    let outside = lla(-165.0, 8.0);

    let (edge, point) = bounds.find_boundary_crossing_edge(&inside, &outside).unwrap();
    std::assert_eq!(edge, BoundaryEdge::Seam);
    std::assert_eq!(point.lon, -170.0);
    std::assert_eq!(point.lat, 6.0);
    std::assert!(bounds.on_boundary(&point));
}

#[test]
fn test_seam_crossing_entering_through_min_x() {
    let bounds: Bounds<Lla> = Bounds::new(170.0, -10.0, -170.0, 10.0);
    let outside = lla(160.0, 2.0);
    let inside = lla(-175.0, 8.0);

    let (edge, point) = bounds.find_boundary_crossing_edge(&outside, &inside).unwrap();
    std::assert_eq!(edge, BoundaryEdge::Seam);
    std::assert_eq!(point.lon, 170.0);
    std::assert!((point.lat - 4.4).abs() < 1e-12);
}

#[test]
fn test_near_seam_same_sign_uses_plain_edges() {
    let bounds: Bounds<Lla> = Bounds::new(170.0, 0.0, -170.0, 10.0);

    let (edge, point) = bounds.find_boundary_crossing_edge(&lla(179.0, 5.0), &lla(165.0, 5.0)).unwrap();
    std::assert_eq!(edge, BoundaryEdge::MinX);
    std::assert_eq!(point, lla(170.0, 5.0));

    let (edge, point) = bounds.find_boundary_crossing_edge(&lla(-179.0, 5.0), &lla(-160.0, 5.0)).unwrap();
    std::assert_eq!(edge, BoundaryEdge::MaxX);
    std::assert_eq!(point, lla(-170.0, 5.0));
}

#[test]
fn test_opposite_sign_across_prime_meridian_goes_around_seam() {
    // Endpoints straddle 0° rather than the seam; the seam branch still
    // interprets the segment as running through ±180° and answers with min_x,
    // not the max_x edge a planar reading of the segment would hit.
    let bounds: Bounds<Lla> = Bounds::new(170.0, 0.0, -170.0, 10.0);

    let (edge, point) = bounds.find_boundary_crossing_edge(&lla(-175.0, 5.0), &lla(5.0, 5.0)).unwrap();
    std::assert_eq!(edge, BoundaryEdge::Seam);
    std::assert_eq!(point, lla(170.0, 5.0));
}

#[test]
fn test_endpoints_on_both_sides_of_seam_meridian() {
    // +180 and -180 are the same meridian, so the seam step has nothing to
    // interpolate across and the plain min_x edge answers instead.
    let bounds: Bounds<Lla> = Bounds::new(170.0, 0.0, -180.0, 10.0);
    let inside = lla(180.0, 5.0);
    let outside = lla(-180.0, 20.0);
    std::assert!(bounds.contains(&inside));
    std::assert!(!bounds.contains(&outside));

    let (edge, point) = bounds.find_boundary_crossing_edge(&inside, &outside).unwrap();
    std::assert_eq!(edge, BoundaryEdge::MinX);
    std::assert_eq!(point.lon, 170.0);
    std::assert!(point.lat.is_finite());
    std::assert!((point.lat - (5.0 + 15.0 / 36.0)).abs() < 1e-12);
}
