pub mod errors;
pub mod utils;
pub mod coordinate;
pub mod bounds;
pub mod commands;
pub mod api;

pub use crate::api::{GeoBounds, PointClass};

pub use errors::{BoundsError, BoundsResult};
pub use bounds::{BoundaryEdge, Bounds, Center, LongitudeSpan};
pub use coordinate::{CoordinateTransformer, Datum, DatumFactory, Enu, Lla, PlanarPoint};
