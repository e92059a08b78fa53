//! Axis-aligned bounds in geodetic and local frames
//!
//! This module provides the bounds data model together with containment,
//! center, projection and boundary crossing operations over it.

mod bbox;
mod center;
mod containment;
mod crossing;
mod projection;
#[cfg(test)]
mod tests;

pub use self::bbox::{Bounds, LongitudeSpan};
pub use self::center::Center;
pub use self::crossing::BoundaryEdge;
