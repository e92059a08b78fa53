//! Bounds center command

use clap::ArgMatches;
use log::info;

use crate::bounds::{Bounds, Center};
use crate::commands::arg_utils::{frame_arg, required_arg, Frame};
use crate::commands::command_traits::Command;
use crate::coordinate::{Enu, Lla};
use crate::errors::BoundsResult;
use crate::utils::logger::Logger;

enum CenterInput {
    Lla(Bounds<Lla>),
    Enu(Bounds<Enu>),
}

/// Command for reporting the center of a box
pub struct CenterCommand<'a> {
    input: CenterInput,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CenterCommand<'a> {
    /// Create a new center command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> BoundsResult<Self> {
        let bbox = required_arg(args, "bbox")?;
        let input = match frame_arg(args)? {
            Frame::Lla => CenterInput::Lla(Bounds::from_string(&bbox)?),
            Frame::Enu => CenterInput::Enu(Bounds::from_string(&bbox)?),
        };

        Ok(CenterCommand { input, logger })
    }
}

impl<'a> Command for CenterCommand<'a> {
    fn execute(&self) -> BoundsResult<()> {
        let (bounds, center) = match &self.input {
            CenterInput::Lla(bounds) => (bounds.to_string(), bounds.center().to_string()),
            CenterInput::Enu(bounds) => (bounds.to_string(), bounds.center().to_string()),
        };

        info!("Center of {} is {}", bounds, center);
        println!("Center: {}", center);
        self.logger.log_result("Center", &[("bounds", bounds), ("center", center)])?;
        Ok(())
    }
}
