//! Coordinate transformation functionality
//!
//! Geodetic (LLA) to Earth-centred (ECEF) to local tangent plane (ENU)
//! conversions on an arbitrary reference ellipsoid.

use super::datum::Datum;
use super::point::{Enu, Lla};

/// Earth-centred, Earth-fixed cartesian coordinates in metres
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Ecef {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Ecef { x, y, z }
    }
}

/// Transformer for converting between geodetic and local frames
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateTransformer;

impl CoordinateTransformer {
    /// Convert a geodetic point to ECEF
    pub fn lla_to_ecef(&self, point: &Lla, datum: &Datum) -> Ecef {
        let lat = point.lat.to_radians();
        let lon = point.lon.to_radians();
        let n = datum.prime_vertical_radius(lat);
        let e2 = datum.eccentricity_squared();

        Ecef::new(
            (n + point.alt) * lat.cos() * lon.cos(),
            (n + point.alt) * lat.cos() * lon.sin(),
            (n * (1.0 - e2) + point.alt) * lat.sin(),
        )
    }

    /// Convert ECEF to a geodetic point using Bowring's method
    pub fn ecef_to_lla(&self, ecef: &Ecef, datum: &Datum) -> Lla {
        let a = datum.semi_major_axis;
        let b = datum.semi_minor_axis();
        let e2 = datum.eccentricity_squared();
        let ep2 = datum.second_eccentricity_squared();

        let p = (ecef.x * ecef.x + ecef.y * ecef.y).sqrt();
        let theta = (ecef.z * a).atan2(p * b);
        let (sin_t, cos_t) = theta.sin_cos();

        let lat = (ecef.z + ep2 * b * sin_t.powi(3)).atan2(p - e2 * a * cos_t.powi(3));
        let lon = ecef.y.atan2(ecef.x);

        let (sin_lat, cos_lat) = lat.sin_cos();
        let n = datum.prime_vertical_radius(lat);
        // Stable at the poles, unlike p / cos(lat) - N
        let alt = p * cos_lat + (ecef.z + e2 * n * sin_lat) * sin_lat - n;

        Lla::new(lat.to_degrees(), lon.to_degrees(), alt)
    }

    /// Convert a geodetic point into the tangent plane at `reference`
    pub fn lla_to_enu(&self, point: &Lla, reference: &Lla, datum: &Datum) -> Enu {
        let target = self.lla_to_ecef(point, datum);
        let origin = self.lla_to_ecef(reference, datum);
        let (dx, dy, dz) = (target.x - origin.x, target.y - origin.y, target.z - origin.z);

        let (sin_lat, cos_lat) = reference.lat.to_radians().sin_cos();
        let (sin_lon, cos_lon) = reference.lon.to_radians().sin_cos();

        Enu::new(
            -sin_lon * dx + cos_lon * dy,
            -sin_lat * cos_lon * dx - sin_lat * sin_lon * dy + cos_lat * dz,
            cos_lat * cos_lon * dx + cos_lat * sin_lon * dy + sin_lat * dz,
        )
    }

    /// Convert a tangent-plane point at `reference` back to geodetic coordinates
    pub fn enu_to_lla(&self, point: &Enu, reference: &Lla, datum: &Datum) -> Lla {
        let origin = self.lla_to_ecef(reference, datum);

        let (sin_lat, cos_lat) = reference.lat.to_radians().sin_cos();
        let (sin_lon, cos_lon) = reference.lon.to_radians().sin_cos();

        // Transpose of the ECEF -> ENU rotation
        let dx = -sin_lon * point.east - sin_lat * cos_lon * point.north + cos_lat * cos_lon * point.up;
        let dy = cos_lon * point.east - sin_lat * sin_lon * point.north + cos_lat * sin_lon * point.up;
        let dz = cos_lat * point.north + sin_lat * point.up;

        self.ecef_to_lla(&Ecef::new(origin.x + dx, origin.y + dy, origin.z + dz), datum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE_M: f64 = 1e-6;

    #[test]
    fn equator_prime_meridian_is_on_x_axis() {
        let datum = Datum::wgs84();
        let ecef = CoordinateTransformer.lla_to_ecef(&Lla::new(0.0, 0.0, 0.0), &datum);
        assert!((ecef.x - datum.semi_major_axis).abs() < TOLERANCE_M);
        assert!(ecef.y.abs() < TOLERANCE_M);
        assert!(ecef.z.abs() < TOLERANCE_M);
    }

    #[test]
    fn north_pole_uses_semi_minor_axis() {
        let datum = Datum::wgs84();
        let ecef = CoordinateTransformer.lla_to_ecef(&Lla::new(90.0, 0.0, 0.0), &datum);
        assert!((ecef.z - datum.semi_minor_axis()).abs() < 1e-3);
    }

    #[test]
    fn reference_maps_to_origin() {
        let datum = Datum::wgs84();
        let reference = Lla::new(47.3, 8.5, 400.0);
        let enu = CoordinateTransformer.lla_to_enu(&reference, &reference, &datum);
        assert!(enu.east.abs() < TOLERANCE_M);
        assert!(enu.north.abs() < TOLERANCE_M);
        assert!(enu.up.abs() < TOLERANCE_M);
    }

    #[test]
    fn axes_point_east_and_north() {
        let datum = Datum::wgs84();
        let reference = Lla::new(10.0, 20.0, 0.0);
        let east = CoordinateTransformer.lla_to_enu(&Lla::new(10.0, 20.001, 0.0), &reference, &datum);
        let north = CoordinateTransformer.lla_to_enu(&Lla::new(10.001, 20.0, 0.0), &reference, &datum);

        assert!(east.east > 100.0 && east.north.abs() < 1.0);
        assert!(north.north > 100.0 && north.east.abs() < 1e-6);
    }

    #[test]
    fn longitude_difference_wraps_across_seam() {
        let datum = Datum::wgs84();
        let reference = Lla::new(0.0, 180.0, 0.0);
        let west = CoordinateTransformer.lla_to_enu(&Lla::new(0.0, 175.0, 0.0), &reference, &datum);
        let east = CoordinateTransformer.lla_to_enu(&Lla::new(0.0, -175.0, 0.0), &reference, &datum);

        assert!(west.east < 0.0);
        assert!(east.east > 0.0);
        assert!((west.east + east.east).abs() < 1e-3);
    }

    #[test]
    fn enu_round_trip_recovers_geodetic_point() {
        let datum = Datum::wgs84();
        let reference = Lla::new(-33.9, 151.2, 50.0);
        let original = Lla::new(-33.5, 151.9, 1200.0);

        let enu = CoordinateTransformer.lla_to_enu(&original, &reference, &datum);
        let back = CoordinateTransformer.enu_to_lla(&enu, &reference, &datum);

        assert!((back.lat - original.lat).abs() < 1e-8);
        assert!((back.lon - original.lon).abs() < 1e-8);
        assert!((back.alt - original.alt).abs() < 1e-3);
    }
}
