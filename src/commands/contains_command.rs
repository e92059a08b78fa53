//! Point containment command
//!
//! Reports whether a point is inside a box, on its boundary or outside.

use std::fmt::Display;

use clap::ArgMatches;
use log::info;

use crate::api::GeoBounds;
use crate::bounds::Bounds;
use crate::commands::arg_utils::{frame_arg, parse_point, required_arg, Frame};
use crate::commands::command_traits::Command;
use crate::coordinate::{Enu, Lla, PlanarPoint};
use crate::errors::BoundsResult;
use crate::utils::logger::Logger;

enum ContainsInput {
    Lla(Bounds<Lla>, Lla),
    Enu(Bounds<Enu>, Enu),
}

/// Command for classifying a single point
pub struct ContainsCommand<'a> {
    input: ContainsInput,
    geobounds: GeoBounds,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ContainsCommand<'a> {
    /// Create a new contains command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> BoundsResult<Self> {
        let bbox = required_arg(args, "bbox")?;
        let point = required_arg(args, "point")?;

        let input = match frame_arg(args)? {
            Frame::Lla => ContainsInput::Lla(Bounds::from_string(&bbox)?, parse_point(&point)?),
            Frame::Enu => ContainsInput::Enu(Bounds::from_string(&bbox)?, parse_point(&point)?),
        };

        Ok(ContainsCommand {
            input,
            geobounds: GeoBounds::default(),
            logger,
        })
    }

    fn report<T: PlanarPoint + Display>(&self, bounds: &Bounds<T>, point: &T) -> BoundsResult<()> {
        let class = self.geobounds.classify(point, bounds);
        info!("Point {} is {} {}", point, class, bounds);

        println!("{}", class);
        self.logger.log_result("Containment", &[
            ("bounds", bounds.to_string()),
            ("point", point.to_string()),
            ("contained", self.geobounds.contains(point, bounds).to_string()),
            ("class", class.to_string()),
        ])?;
        Ok(())
    }
}

impl<'a> Command for ContainsCommand<'a> {
    fn execute(&self) -> BoundsResult<()> {
        match &self.input {
            ContainsInput::Lla(bounds, point) => self.report(bounds, point),
            ContainsInput::Enu(bounds, point) => self.report(bounds, point),
        }
    }
}
