//! Bounding box structure for defining regions

use std::fmt;
use std::marker::PhantomData;

use crate::coordinate::PlanarPoint;
use crate::errors::{BoundsError, BoundsResult};
use crate::utils::coordinate_utils::parse_values;

/// How a box's x range is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongitudeSpan {
    /// `min_x <= x <= max_x`
    Normal,
    /// Crosses the ±180° seam: `x >= min_x || x <= max_x`
    WrapsSeam,
}

/// An axis-aligned box in the horizontal plane of frame `T`
///
/// For geodetic boxes `min_x > max_x` is legal and means the box wraps
/// through the antimeridian, so `min_x = 170, max_x = -170` is a 20° slice.
/// Local boxes are never inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Minimum X coordinate (western edge)
    pub min_x: f64,
    /// Minimum Y coordinate (southern edge)
    pub min_y: f64,
    /// Maximum X coordinate (eastern edge)
    pub max_x: f64,
    /// Maximum Y coordinate (northern edge)
    pub max_y: f64,
    frame: PhantomData<T>,
}

impl<T: PlanarPoint> Bounds<T> {
    /// Create a new bounding box without validation
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
            frame: PhantomData,
        }
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> BoundsResult<Self> {
        let values = parse_values(bbox_str, 4, 4)
            .map_err(|e| BoundsError::ParseError(format!("Bounding box must be 'minx,miny,maxx,maxy': {}", e)))?;

        let bounds = Bounds::new(values[0], values[1], values[2], values[3]);
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check that the box is well formed for its frame
    pub fn validate(&self) -> BoundsResult<()> {
        let values = [self.min_x, self.min_y, self.max_x, self.max_y];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(BoundsError::InvalidBounds(format!("Non-finite value in {}", self)));
        }
        if self.min_y > self.max_y {
            return Err(BoundsError::InvalidBounds(format!(
                "min_y {} exceeds max_y {}", self.min_y, self.max_y)));
        }

        if T::WRAPS_LONGITUDE {
            let lon_ok = |x: f64| (-180.0..=180.0).contains(&x);
            let lat_ok = |y: f64| (-90.0..=90.0).contains(&y);
            if !lon_ok(self.min_x) || !lon_ok(self.max_x) {
                return Err(BoundsError::InvalidBounds(format!(
                    "Longitude outside [-180, 180] in {}", self)));
            }
            if !lat_ok(self.min_y) || !lat_ok(self.max_y) {
                return Err(BoundsError::InvalidBounds(format!(
                    "Latitude outside [-90, 90] in {}", self)));
            }
        } else if self.min_x > self.max_x {
            return Err(BoundsError::InvalidBounds(format!(
                "min_x {} exceeds max_x {}", self.min_x, self.max_x)));
        }

        Ok(())
    }

    /// Discriminate wrapped from ordinary x ranges
    pub fn x_span(&self) -> LongitudeSpan {
        if T::WRAPS_LONGITUDE && self.min_x > self.max_x {
            LongitudeSpan::WrapsSeam
        } else {
            LongitudeSpan::Normal
        }
    }

    /// Get the width of the bounding box, measured eastwards across the seam if wrapped
    pub fn width(&self) -> f64 {
        match self.x_span() {
            LongitudeSpan::Normal => self.max_x - self.min_x,
            LongitudeSpan::WrapsSeam => self.max_x - self.min_x + 360.0,
        }
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Corners in SW, SE, NE, NW order
    pub fn corners(&self) -> [T; 4] {
        [
            T::from_planar(self.min_x, self.min_y),
            T::from_planar(self.max_x, self.min_y),
            T::from_planar(self.max_x, self.max_y),
            T::from_planar(self.min_x, self.max_y),
        ]
    }
}

impl<T> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.min_x, self.max_x, self.min_y, self.max_y)
    }
}
