//! Segment boundary crossing command

use std::fmt::Display;

use clap::ArgMatches;
use log::{info, warn};

use crate::bounds::Bounds;
use crate::commands::arg_utils::{frame_arg, parse_segment, required_arg, Frame};
use crate::commands::command_traits::Command;
use crate::coordinate::{Enu, Lla, PlanarPoint};
use crate::errors::BoundsResult;
use crate::utils::logger::Logger;

enum CrossingInput {
    Lla(Bounds<Lla>, Lla, Lla),
    Enu(Bounds<Enu>, Enu, Enu),
}

/// Command for locating where a segment meets a box edge
pub struct CrossingCommand<'a> {
    input: CrossingInput,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CrossingCommand<'a> {
    /// Create a new crossing command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> BoundsResult<Self> {
        let bbox = required_arg(args, "bbox")?;
        let segment = required_arg(args, "segment")?;

        let input = match frame_arg(args)? {
            Frame::Lla => {
                let (start, end) = parse_segment(&segment)?;
                CrossingInput::Lla(Bounds::from_string(&bbox)?, start, end)
            }
            Frame::Enu => {
                let (start, end) = parse_segment(&segment)?;
                CrossingInput::Enu(Bounds::from_string(&bbox)?, start, end)
            }
        };

        Ok(CrossingCommand { input, logger })
    }

    fn report<T: PlanarPoint + Display>(&self, bounds: &Bounds<T>, start: &T, end: &T) -> BoundsResult<()> {
        if bounds.contains(start) == bounds.contains(end) {
            warn!("Both endpoints are {} the bounds; a crossing may not exist",
                  if bounds.contains(start) { "inside" } else { "outside" });
        }

        let (edge, point) = bounds.find_boundary_crossing_edge(start, end)?;
        info!("Segment {} -> {} crosses {} at {}", start, end, edge, point);

        println!("Crossing on {}: {}", edge, point);
        self.logger.log_result("Crossing", &[
            ("bounds", bounds.to_string()),
            ("start", start.to_string()),
            ("end", end.to_string()),
            ("edge", edge.to_string()),
            ("point", point.to_string()),
        ])?;
        Ok(())
    }
}

impl<'a> Command for CrossingCommand<'a> {
    fn execute(&self) -> BoundsResult<()> {
        match &self.input {
            CrossingInput::Lla(bounds, start, end) => self.report(bounds, start, end),
            CrossingInput::Enu(bounds, start, end) => self.report(bounds, start, end),
        }
    }
}
