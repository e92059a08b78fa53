use std::fmt;

use log::info;

use crate::bounds::{Bounds, Center};
use crate::coordinate::{CoordinateTransformer, Datum, DatumFactory, Enu, Lla, PlanarPoint};
use crate::errors::BoundsResult;

/// Where a point sits relative to a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointClass {
    /// Strictly inside
    Inside,
    /// Inside and touching an edge
    OnBoundary,
    Outside,
}

impl fmt::Display for PointClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PointClass::Inside => "inside",
            PointClass::OnBoundary => "on boundary",
            PointClass::Outside => "outside",
        };
        write!(f, "{}", name)
    }
}

/// Main interface to the GeoBounds library
///
/// Holds the datum used whenever a geodetic box or point is taken into a
/// local frame; all other operations are frame-generic.
#[derive(Debug, Clone, Default)]
pub struct GeoBounds {
    datum: Datum,
}

impl GeoBounds {
    /// Create a new GeoBounds instance
    ///
    /// # Arguments
    /// * `datum` - Optional datum name or `custom:<a>,<1/f>`, defaults to WGS84
    ///
    /// # Returns
    /// A GeoBounds instance or an error if the datum is unknown
    pub fn new(datum: Option<&str>) -> BoundsResult<Self> {
        let datum = match datum {
            Some(name) => DatumFactory::from_string(name, None)?,
            None => Datum::wgs84(),
        };
        info!("Using datum {} (a={}, 1/f={})", datum.name, datum.semi_major_axis, datum.inverse_flattening);
        Ok(GeoBounds { datum })
    }

    /// Create an instance around an already resolved datum
    pub fn with_datum(datum: Datum) -> Self {
        GeoBounds { datum }
    }

    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    /// Smallest local box enclosing a geodetic box
    ///
    /// # Arguments
    /// * `bounds` - Geodetic box, possibly wrapping the antimeridian
    /// * `reference` - Tangent point, defaults to the center of `bounds`
    pub fn project_to_local(&self, bounds: &Bounds<Lla>, reference: Option<Lla>) -> Bounds<Enu> {
        bounds.project_to_local(reference, &self.datum)
    }

    /// Midpoint of a box, wrap-corrected for geodetic boxes
    pub fn center<B: Center>(&self, bounds: &B) -> B::Point {
        bounds.center()
    }

    /// Boundary-inclusive containment
    pub fn contains<T: PlanarPoint>(&self, point: &T, bounds: &Bounds<T>) -> bool {
        bounds.contains(point)
    }

    /// Whether a contained point touches an edge
    ///
    /// The point must already be known to be inside `bounds`.
    pub fn is_on_boundary<T: PlanarPoint>(&self, point: &T, bounds: &Bounds<T>) -> bool {
        bounds.on_boundary(point)
    }

    /// Point where the segment `p1 -> p2` meets the boundary
    ///
    /// Exactly one of `p1`, `p2` should be inside `bounds`.
    pub fn find_boundary_crossing<T: PlanarPoint>(&self, p1: &T, p2: &T, bounds: &Bounds<T>) -> BoundsResult<T> {
        bounds.find_boundary_crossing(p1, p2)
    }

    /// Containment and boundary test in one step
    pub fn classify<T: PlanarPoint>(&self, point: &T, bounds: &Bounds<T>) -> PointClass {
        if !bounds.contains(point) {
            PointClass::Outside
        } else if bounds.on_boundary(point) {
            PointClass::OnBoundary
        } else {
            PointClass::Inside
        }
    }

    /// Convert a single geodetic point into the tangent plane at `reference`
    pub fn to_local(&self, point: &Lla, reference: &Lla) -> Enu {
        CoordinateTransformer.lla_to_enu(point, reference, &self.datum)
    }

    /// Convert a single local point back to geodetic coordinates
    pub fn to_geodetic(&self, point: &Enu, reference: &Lla) -> Lla {
        CoordinateTransformer.enu_to_lla(point, reference, &self.datum)
    }
}
