//! Enclosing local box of a geodetic box
//!
//! The projection of a lat/lon rectangle into a tangent plane is not a
//! rectangle, and its extremes are not always at the corners. Besides the
//! corners, the x extremes can sit on the equator and the y extremes on the
//! reference meridian, so those values join the sample set when they fall
//! strictly inside the box.

use log::{debug, trace};

use super::bbox::Bounds;
use super::center::Center;
use crate::coordinate::{CoordinateTransformer, Datum, Enu, Lla};

impl Bounds<Lla> {
    /// Longitudes at which the projection can reach an x/y extreme
    pub fn longitude_candidates(&self, reference_lon: f64) -> Vec<f64> {
        let mut candidates = vec![self.min_x, self.max_x];

        let inside_normal = self.min_x < reference_lon && reference_lon < self.max_x;
        let inside_wrapped = self.min_x > self.max_x
            && !(self.min_x >= reference_lon && reference_lon >= self.max_x);
        if inside_normal || inside_wrapped {
            candidates.push(reference_lon);
        }

        candidates
    }

    /// Latitudes at which the projection can reach an x/y extreme
    pub fn latitude_candidates(&self) -> Vec<f64> {
        let mut candidates = vec![self.min_y, self.max_y];
        if self.min_y < 0.0 && 0.0 < self.max_y {
            candidates.push(0.0);
        }
        candidates
    }

    /// Smallest local box enclosing this geodetic box
    ///
    /// # Arguments
    /// * `reference` - Tangent point, defaults to [`Center::center`] of the box
    /// * `datum` - Ellipsoid used for the conversion
    pub fn project_to_local(&self, reference: Option<Lla>, datum: &Datum) -> Bounds<Enu> {
        let reference = reference.unwrap_or_else(|| self.center());
        let longitudes = self.longitude_candidates(reference.lon);
        let latitudes = self.latitude_candidates();

        debug!("Projecting {} about ({}) with {} longitude and {} latitude candidates",
               self, reference, longitudes.len(), latitudes.len());

        let transformer = CoordinateTransformer;
        let (min_x, min_y, max_x, max_y) = latitudes.iter()
            .flat_map(|&lat| longitudes.iter().map(move |&lon| Lla::new(lat, lon, 0.0)))
            .map(|sample| {
                let local = transformer.lla_to_enu(&sample, &reference, datum);
                trace!("Sample ({}) -> ({})", sample, local);
                local
            })
            .fold(
                (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
                |(min_x, min_y, max_x, max_y), p| {
                    (min_x.min(p.east), min_y.min(p.north), max_x.max(p.east), max_y.max(p.north))
                },
            );

        let projected = Bounds::new(min_x, min_y, max_x, max_y);
        debug!("Projected local bounds: {}", projected);
        projected
    }
}
