//! Boundary crossing along a segment
//!
//! Given one endpoint inside and one outside a box, find where the segment
//! meets the box edge by linear interpolation. Edges are tried in a fixed
//! order and the first interpolated point that lands inside the box wins:
//! seam, min_x, max_x, min_y, max_y. Corner-adjacent crossings can satisfy
//! more than one edge, so the order decides which point is returned.

use std::fmt;

use log::{debug, warn};

use super::bbox::{Bounds, LongitudeSpan};
use crate::coordinate::PlanarPoint;
use crate::errors::{BoundsError, BoundsResult};

/// Edge on which a crossing was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryEdge {
    /// Across the ±180° seam of a wrapped geodetic box
    Seam,
    MinX,
    MaxX,
    MinY,
    MaxY,
}

impl fmt::Display for BoundaryEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundaryEdge::Seam => "seam",
            BoundaryEdge::MinX => "min_x",
            BoundaryEdge::MaxX => "max_x",
            BoundaryEdge::MinY => "min_y",
            BoundaryEdge::MaxY => "max_y",
        };
        write!(f, "{}", name)
    }
}

/// Strictly between, in either order
fn straddles(a: f64, b: f64, edge: f64) -> bool {
    (a < edge && edge < b) || (b < edge && edge < a)
}

/// Value of the other coordinate where the line through (u1, v1)-(u2, v2) reaches u = edge
fn interpolate(u1: f64, v1: f64, u2: f64, v2: f64, edge: f64) -> f64 {
    v1 + (v2 - v1) * (edge - u1) / (u2 - u1)
}

impl<T: PlanarPoint> Bounds<T> {
    /// Point on the segment `p1 -> p2` that lies on the boundary
    ///
    /// Expects exactly one of the endpoints to be inside the box. Fails with
    /// [`BoundsError::BoundaryNotFound`] when no candidate lands inside,
    /// e.g. for a zero-length segment.
    pub fn find_boundary_crossing(&self, p1: &T, p2: &T) -> BoundsResult<T> {
        self.find_boundary_crossing_edge(p1, p2).map(|(_, point)| point)
    }

    /// Like [`Bounds::find_boundary_crossing`], also reporting the edge that matched
    pub fn find_boundary_crossing_edge(&self, p1: &T, p2: &T) -> BoundsResult<(BoundaryEdge, T)> {
        let found = self.seam_crossing(p1, p2)
            .or_else(|| self.x_edge_crossing(p1, p2, BoundaryEdge::MinX, self.min_x))
            .or_else(|| self.x_edge_crossing(p1, p2, BoundaryEdge::MaxX, self.max_x))
            .or_else(|| self.y_edge_crossing(p1, p2, BoundaryEdge::MinY, self.min_y))
            .or_else(|| self.y_edge_crossing(p1, p2, BoundaryEdge::MaxY, self.max_y));

        match found {
            Some((edge, point)) => {
                debug!("Segment ({:?}) -> ({:?}) crosses {} at ({}, {})",
                       p1, p2, edge, point.x(), point.y());
                Ok((edge, point))
            }
            None => {
                warn!("No boundary crossing for segment ({:?}) -> ({:?}) in {}", p1, p2, self);
                Err(BoundsError::BoundaryNotFound {
                    from: (p1.x(), p1.y()),
                    to: (p2.x(), p2.y()),
                })
            }
        }
    }

    fn accept(&self, edge: BoundaryEdge, candidate: T) -> Option<(BoundaryEdge, T)> {
        if self.contains(&candidate) {
            Some((edge, candidate))
        } else {
            None
        }
    }

    /// Crossing for a segment whose endpoints lie on opposite sides of the seam
    ///
    /// The positive-longitude endpoint is taken to be on the min_x side. When
    /// it is the outside one the segment enters through min_x, otherwise it
    /// leaves through max_x. Interpolation runs in unwrapped longitudes.
    fn seam_crossing(&self, p1: &T, p2: &T) -> Option<(BoundaryEdge, T)> {
        if self.x_span() != LongitudeSpan::WrapsSeam || !(p1.x() * p2.x() < 0.0) {
            return None;
        }

        let (east, west) = if p1.x() > 0.0 { (p1, p2) } else { (p2, p1) };

        let (edge_x, east_x, west_x) = if self.contains(east) {
            (self.max_x, east.x() - 360.0, west.x())
        } else {
            (self.min_x, east.x(), west.x() + 360.0)
        };
        // +180 and -180 unwrap onto the same meridian
        if east_x == west_x {
            return None;
        }

        let y = interpolate(east_x, east.y(), west_x, west.y(), edge_x);
        self.accept(BoundaryEdge::Seam, T::from_planar(edge_x, y))
    }

    fn x_edge_crossing(&self, p1: &T, p2: &T, edge: BoundaryEdge, edge_x: f64) -> Option<(BoundaryEdge, T)> {
        if !straddles(p1.x(), p2.x(), edge_x) {
            return None;
        }
        let y = interpolate(p1.x(), p1.y(), p2.x(), p2.y(), edge_x);
        self.accept(edge, T::from_planar(edge_x, y))
    }

    fn y_edge_crossing(&self, p1: &T, p2: &T, edge: BoundaryEdge, edge_y: f64) -> Option<(BoundaryEdge, T)> {
        if !straddles(p1.y(), p2.y(), edge_y) {
            return None;
        }
        let x = interpolate(p1.y(), p1.x(), p2.y(), p2.x(), edge_y);
        self.accept(edge, T::from_planar(x, edge_y))
    }
}
