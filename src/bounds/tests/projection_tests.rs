//! Tests for the enclosing local box of a geodetic box

extern crate std;

use super::test_utils::sample_grid;
use crate::bounds::{Bounds, Center};
use crate::coordinate::{CoordinateTransformer, Datum, DatumFactory, Enu, Lla};

const SLACK_M: f64 = 1e-6;

fn assert_encloses(bounds: &Bounds<Lla>, reference: Option<Lla>, datum: &Datum) {
    let projected = bounds.project_to_local(reference, datum);
    let reference = reference.unwrap_or_else(|| bounds.center());

    std::assert!(projected.min_x <= projected.max_x);
    std::assert!(projected.min_y <= projected.max_y);

    for sample in sample_grid(bounds, 24) {
        std::assert!(bounds.contains(&sample), "grid sample {:?} outside {}", sample, bounds);
        let local = CoordinateTransformer.lla_to_enu(&sample, &reference, datum);
        std::assert!(
            local.east >= projected.min_x - SLACK_M && local.east <= projected.max_x + SLACK_M
                && local.north >= projected.min_y - SLACK_M && local.north <= projected.max_y + SLACK_M,
            "{:?} projects to {:?}, outside {}", sample, local, projected
        );
    }
}

#[test]
fn test_equator_candidate_only_when_strictly_straddled() {
    let straddling: Bounds<Lla> = Bounds::new(0.0, -10.0, 10.0, 10.0);
    std::assert_eq!(straddling.latitude_candidates(), vec![-10.0, 10.0, 0.0]);

    let touching: Bounds<Lla> = Bounds::new(0.0, 0.0, 10.0, 10.0);
    std::assert_eq!(touching.latitude_candidates(), vec![0.0, 10.0]);
}

#[test]
fn test_reference_longitude_candidate() {
    let normal: Bounds<Lla> = Bounds::new(10.0, 0.0, 30.0, 10.0);
    std::assert_eq!(normal.longitude_candidates(20.0), vec![10.0, 30.0, 20.0]);
    std::assert_eq!(normal.longitude_candidates(10.0), vec![10.0, 30.0]);
    std::assert_eq!(normal.longitude_candidates(-20.0), vec![10.0, 30.0]);

    let wrapped: Bounds<Lla> = Bounds::new(170.0, 0.0, -170.0, 10.0);
    std::assert_eq!(wrapped.longitude_candidates(180.0), vec![170.0, -170.0, 180.0]);
    std::assert_eq!(wrapped.longitude_candidates(-175.0), vec![170.0, -170.0, -175.0]);
    std::assert_eq!(wrapped.longitude_candidates(170.0), vec![170.0, -170.0]);
    std::assert_eq!(wrapped.longitude_candidates(0.0), vec![170.0, -170.0]);
}

#[test]
fn test_encloses_box_straddling_equator() {
    let bounds: Bounds<Lla> = Bounds::new(0.0, -30.0, 40.0, 30.0);
    assert_encloses(&bounds, None, &Datum::wgs84());
}

#[test]
fn test_encloses_with_reference_meridian_inside() {
    let bounds: Bounds<Lla> = Bounds::new(5.0, 40.0, 25.0, 60.0);
    assert_encloses(&bounds, Some(Lla::new(45.0, 12.0, 0.0)), &Datum::wgs84());
}

#[test]
fn test_encloses_with_reference_outside() {
    let bounds: Bounds<Lla> = Bounds::new(10.0, 40.0, 30.0, 60.0);
    assert_encloses(&bounds, Some(Lla::new(50.0, 0.0, 0.0)), &Datum::wgs84());
    assert_encloses(&bounds, Some(Lla::new(0.0, 0.0, 0.0)), &Datum::wgs84());
}

#[test]
fn test_encloses_wrapped_box() {
    let bounds: Bounds<Lla> = Bounds::new(170.0, -10.0, -170.0, 10.0);
    assert_encloses(&bounds, None, &Datum::wgs84());
    assert_encloses(&bounds, Some(Lla::new(0.0, -175.0, 0.0)), &Datum::wgs84());
}

#[test]
fn test_encloses_southern_box_on_other_datum() {
    let grs80 = DatumFactory::from_name("GRS80").unwrap();
    let bounds: Bounds<Lla> = Bounds::new(-75.0, -55.0, -60.0, -35.0);
    assert_encloses(&bounds, None, &grs80);
}

#[test]
fn test_equator_sample_widens_beyond_corners() {
    let datum = Datum::wgs84();
    let bounds: Bounds<Lla> = Bounds::new(0.0, -30.0, 40.0, 30.0);
    let reference = bounds.center();
    let projected = bounds.project_to_local(None, &datum);

    let corner_max_east = bounds.corners().iter()
        .map(|c| CoordinateTransformer.lla_to_enu(c, &reference, &datum).east)
        .fold(f64::NEG_INFINITY, f64::max);

    std::assert!(projected.max_x > corner_max_east + 1000.0);
}

#[test]
fn test_reference_meridian_sample_widens_beyond_corners() {
    let datum = Datum::wgs84();
    let bounds: Bounds<Lla> = Bounds::new(-20.0, 40.0, 20.0, 60.0);
    let reference = bounds.center();
    let projected = bounds.project_to_local(None, &datum);

    let corner_max_north = bounds.corners().iter()
        .map(|c| CoordinateTransformer.lla_to_enu(c, &reference, &datum).north)
        .fold(f64::NEG_INFINITY, f64::max);

    std::assert!(projected.max_y > corner_max_north + 1000.0);
}

#[test]
fn test_default_reference_is_center() {
    let datum = Datum::wgs84();
    let bounds: Bounds<Lla> = Bounds::new(8.0, 46.0, 10.0, 48.0);

    let implicit = bounds.project_to_local(None, &datum);
    let explicit = bounds.project_to_local(Some(bounds.center()), &datum);
    std::assert_eq!(implicit, explicit);
    std::assert!(implicit.contains(&Enu::new(0.0, 0.0, 0.0)));
}
