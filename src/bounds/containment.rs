//! Point-in-bounds predicates
//!
//! Both predicates are boundary inclusive and compare exactly, with no
//! tolerance.

use super::bbox::{Bounds, LongitudeSpan};
use crate::coordinate::PlanarPoint;
use crate::errors::{BoundsError, BoundsResult};

impl<T: PlanarPoint> Bounds<T> {
    /// Check if this bounding box contains a point
    pub fn contains(&self, point: &T) -> bool {
        let (x, y) = (point.x(), point.y());

        if !(self.min_y <= y && y <= self.max_y) {
            return false;
        }

        match self.x_span() {
            LongitudeSpan::Normal => self.min_x <= x && x <= self.max_x,
            LongitudeSpan::WrapsSeam => x <= self.max_x || x >= self.min_x,
        }
    }

    /// Whether a contained point lies on an edge
    ///
    /// Only meaningful for points where [`Bounds::contains`] holds; an
    /// outside point sharing a coordinate with an edge also reports true.
    /// Use [`Bounds::try_on_boundary`] when containment is not known.
    pub fn on_boundary(&self, point: &T) -> bool {
        let (x, y) = (point.x(), point.y());
        x == self.min_x || x == self.max_x || y == self.min_y || y == self.max_y
    }

    /// [`Bounds::on_boundary`] with the containment precondition checked
    pub fn try_on_boundary(&self, point: &T) -> BoundsResult<bool> {
        if !self.contains(point) {
            return Err(BoundsError::PreconditionViolation(format!(
                "({}, {}) is outside {}", point.x(), point.y(), self)));
        }
        Ok(self.on_boundary(point))
    }
}
