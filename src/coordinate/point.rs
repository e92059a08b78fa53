//! Point structures for geodetic and local tangent-plane coordinates

use std::fmt;

use crate::errors::{BoundsError, BoundsResult};
use crate::utils::coordinate_utils::parse_values;

/// Planar view of a point, shared by every coordinate frame bounds can be built in
///
/// `x` is longitude/east and `y` is latitude/north.
pub trait PlanarPoint: Copy + fmt::Debug {
    /// Whether x is a longitude that wraps at the ±180° seam
    const WRAPS_LONGITUDE: bool;

    /// Horizontal coordinate
    fn x(&self) -> f64;

    /// Vertical coordinate
    fn y(&self) -> f64;

    /// Build a point from a planar pair, with zero altitude/up
    fn from_planar(x: f64, y: f64) -> Self;
}

/// A geodetic point (degrees, metres)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lla {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Altitude above the ellipsoid in metres
    pub alt: f64,
}

impl Lla {
    /// Create a new geodetic point
    pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Lla { lat, lon, alt }
    }

    /// Parse "lon,lat" or "lon,lat,alt"
    pub fn from_string(text: &str) -> BoundsResult<Self> {
        let values = parse_values(text, 2, 3)?;
        Ok(Lla::new(values[1], values[0], values.get(2).copied().unwrap_or(0.0)))
    }

    /// Check latitude and longitude ranges and that every value is finite
    pub fn validate(&self) -> BoundsResult<()> {
        if !(self.lat.is_finite() && self.lon.is_finite() && self.alt.is_finite()) {
            return Err(BoundsError::InvalidBounds(format!("Non-finite value in {}", self)));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(BoundsError::InvalidBounds(format!("Latitude outside [-90, 90] in {}", self)));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(BoundsError::InvalidBounds(format!("Longitude outside [-180, 180] in {}", self)));
        }
        Ok(())
    }
}

impl PlanarPoint for Lla {
    const WRAPS_LONGITUDE: bool = true;

    fn x(&self) -> f64 {
        self.lon
    }

    fn y(&self) -> f64 {
        self.lat
    }

    fn from_planar(x: f64, y: f64) -> Self {
        Lla::new(y, x, 0.0)
    }
}

impl fmt::Display for Lla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lon={:.9}, lat={:.9}, alt={:.3}", self.lon, self.lat, self.alt)
    }
}

/// A point in a local East/North/Up frame (metres)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Enu {
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

impl Enu {
    /// Create a new local point
    pub fn new(east: f64, north: f64, up: f64) -> Self {
        Enu { east, north, up }
    }

    /// Parse "east,north" or "east,north,up"
    pub fn from_string(text: &str) -> BoundsResult<Self> {
        let values = parse_values(text, 2, 3)?;
        Ok(Enu::new(values[0], values[1], values.get(2).copied().unwrap_or(0.0)))
    }
}

impl PlanarPoint for Enu {
    const WRAPS_LONGITUDE: bool = false;

    fn x(&self) -> f64 {
        self.east
    }

    fn y(&self) -> f64 {
        self.north
    }

    fn from_planar(x: f64, y: f64) -> Self {
        Enu::new(x, y, 0.0)
    }
}

impl fmt::Display for Enu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "east={:.3}, north={:.3}, up={:.3}", self.east, self.north, self.up)
    }
}
