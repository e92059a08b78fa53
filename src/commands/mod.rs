//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod arg_utils;
pub mod command_traits;
pub mod center_command;
pub mod classify_command;
pub mod contains_command;
pub mod crossing_command;
pub mod project_command;

pub use command_traits::{Command, CommandFactory};
pub use center_command::CenterCommand;
pub use classify_command::ClassifyCommand;
pub use contains_command::ContainsCommand;
pub use crossing_command::CrossingCommand;
pub use project_command::ProjectCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::errors::{BoundsError, BoundsResult};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct GeoBoundsCommandFactory;

impl GeoBoundsCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeoBoundsCommandFactory
    }
}

impl Default for GeoBoundsCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeoBoundsCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> BoundsResult<Box<dyn Command + 'a>> {
        if args.get_flag("project") {
            Ok(Box::new(ProjectCommand::new(args, logger)?))
        } else if args.get_flag("center") {
            Ok(Box::new(CenterCommand::new(args, logger)?))
        } else if args.contains_id("segment") {
            Ok(Box::new(CrossingCommand::new(args, logger)?))
        } else if args.contains_id("points-file") {
            Ok(Box::new(ClassifyCommand::new(args, logger)?))
        } else if args.contains_id("point") {
            Ok(Box::new(ContainsCommand::new(args, logger)?))
        } else {
            Err(BoundsError::GenericError(
                "Nothing to do: use --project, --center, --point, --segment or --points-file".to_string()))
        }
    }
}
