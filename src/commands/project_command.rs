//! Geodetic to local bounds projection command
//!
//! This module implements the command that turns a longitude/latitude box
//! into the smallest east/north box enclosing it.

use clap::ArgMatches;
use log::info;

use crate::api::GeoBounds;
use crate::bounds::{Bounds, Center};
use crate::commands::arg_utils::{datum_arg, frame_arg, required_arg, Frame};
use crate::commands::command_traits::Command;
use crate::coordinate::Lla;
use crate::errors::{BoundsError, BoundsResult};
use crate::utils::logger::Logger;

/// Command for projecting a geodetic box into a local frame
pub struct ProjectCommand<'a> {
    /// Box to project
    bounds: Bounds<Lla>,
    /// Tangent point, the box center when absent
    reference: Option<Lla>,
    /// Library facade carrying the datum
    geobounds: GeoBounds,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ProjectCommand<'a> {
    /// Create a new project command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ProjectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> BoundsResult<Self> {
        if frame_arg(args)? != Frame::Lla {
            return Err(BoundsError::GenericError(
                "Projection takes a geodetic box; use --frame lla".to_string()));
        }

        let bounds = Bounds::<Lla>::from_string(&required_arg(args, "bbox")?)?;
        let reference = args.get_one::<String>("reference")
            .map(|text| Lla::from_string(text))
            .transpose()?;
        if let Some(point) = &reference {
            point.validate()?;
        }
        let geobounds = GeoBounds::with_datum(datum_arg(args)?);

        Ok(ProjectCommand {
            bounds,
            reference,
            geobounds,
            logger,
        })
    }
}

impl<'a> Command for ProjectCommand<'a> {
    fn execute(&self) -> BoundsResult<()> {
        let reference = self.reference.unwrap_or_else(|| self.bounds.center());
        info!("Projecting {} about {} on {}", self.bounds, reference, self.geobounds.datum().name);

        let projected = self.geobounds.project_to_local(&self.bounds, Some(reference));

        let entries = [
            ("bounds", self.bounds.to_string()),
            ("reference", reference.to_string()),
            ("datum", self.geobounds.datum().name.clone()),
            ("min_east", format!("{:.3}", projected.min_x)),
            ("max_east", format!("{:.3}", projected.max_x)),
            ("min_north", format!("{:.3}", projected.min_y)),
            ("max_north", format!("{:.3}", projected.max_y)),
            ("width_m", format!("{:.3}", projected.width())),
            ("height_m", format!("{:.3}", projected.height())),
        ];

        println!("Local bounds:");
        for (key, value) in &entries {
            println!("  {}: {}", key, value);
        }

        self.logger.log_result("Projection", &entries)?;
        Ok(())
    }
}
