//! Coordinate handling for geodetic and local data
//!
//! This module provides point types for the supported frames, reference
//! ellipsoids and the conversions between frames.

mod datum;
mod point;
mod transform;

// Re-export key types
pub use self::datum::{Datum, DatumDefinitions, DatumFactory};
pub use self::point::{Enu, Lla, PlanarPoint};
pub use self::transform::{CoordinateTransformer, Ecef};
