//! Center-of-bounds computation

use super::bbox::{Bounds, LongitudeSpan};
use crate::coordinate::{Enu, Lla};

/// Midpoint of a box in its own frame
pub trait Center {
    type Point;

    fn center(&self) -> Self::Point;
}

impl Center for Bounds<Enu> {
    type Point = Enu;

    fn center(&self) -> Enu {
        Enu::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            0.0,
        )
    }
}

impl Center for Bounds<Lla> {
    type Point = Lla;

    /// The naive longitude average of a wrapped box lands on the opposite
    /// meridian, so it is moved by 180° back into the box.
    fn center(&self) -> Lla {
        let mut lon = (self.min_x + self.max_x) / 2.0;
        if self.x_span() == LongitudeSpan::WrapsSeam {
            lon = if lon > 0.0 { lon - 180.0 } else { lon + 180.0 };
        }

        Lla::new((self.min_y + self.max_y) / 2.0, lon, 0.0)
    }
}
