//! Batch point classification command
//!
//! Reads one point per line from a file and classifies each against a box.
//! Blank lines and lines starting with `#` are skipped.

use std::collections::HashMap;
use std::fmt::Display;
use std::fs;

use clap::ArgMatches;
use log::{debug, info};

use crate::api::{GeoBounds, PointClass};
use crate::bounds::Bounds;
use crate::commands::arg_utils::{frame_arg, parse_point, required_arg, Frame};
use crate::commands::command_traits::Command;
use crate::coordinate::{Enu, Lla, PlanarPoint};
use crate::errors::{BoundsError, BoundsResult};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

enum ClassifyBounds {
    Lla(Bounds<Lla>),
    Enu(Bounds<Enu>),
}

/// Command for classifying every point in a file
pub struct ClassifyCommand<'a> {
    /// Path to the points file
    points_file: String,
    bounds: ClassifyBounds,
    /// Whether to print one line per point
    verbose: bool,
    geobounds: GeoBounds,
    /// Logger for recording operations
    logger: &'a Logger,
}

/// Classify the non-comment lines of `content` against `bounds`
pub fn classify_lines<T: PlanarPoint>(
    geobounds: &GeoBounds,
    bounds: &Bounds<T>,
    content: &str,
    progress: &ProgressTracker,
) -> BoundsResult<Vec<(T, PointClass)>> {
    let mut results = Vec::new();

    for (index, line) in content.lines().enumerate() {
        progress.increment(1);
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let point: T = parse_point(line)
            .map_err(|e| BoundsError::ParseError(format!("line {}: {}", index + 1, e)))?;
        results.push((point, geobounds.classify(&point, bounds)));
    }

    debug!("Classified {} points", results.len());
    Ok(results)
}

impl<'a> ClassifyCommand<'a> {
    /// Create a new classify command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> BoundsResult<Self> {
        let points_file = required_arg(args, "points-file")?;
        let bbox = required_arg(args, "bbox")?;
        let bounds = match frame_arg(args)? {
            Frame::Lla => ClassifyBounds::Lla(Bounds::from_string(&bbox)?),
            Frame::Enu => ClassifyBounds::Enu(Bounds::from_string(&bbox)?),
        };

        Ok(ClassifyCommand {
            points_file,
            bounds,
            verbose: args.get_flag("verbose"),
            geobounds: GeoBounds::default(),
            logger,
        })
    }

    fn run<T: PlanarPoint + Display>(&self, bounds: &Bounds<T>, content: &str) -> BoundsResult<()> {
        let progress = ProgressTracker::new(content.lines().count() as u64, "Classifying points");
        let results = classify_lines(&self.geobounds, bounds, content, &progress)?;
        progress.finish();

        let mut counts: HashMap<PointClass, usize> = HashMap::new();
        for (point, class) in &results {
            *counts.entry(*class).or_insert(0) += 1;
            if self.verbose {
                println!("{}: {}", point, class);
            }
        }

        let count = |class: PointClass| counts.get(&class).copied().unwrap_or(0);
        let entries = [
            ("file", self.points_file.clone()),
            ("bounds", bounds.to_string()),
            ("points", results.len().to_string()),
            ("inside", count(PointClass::Inside).to_string()),
            ("on_boundary", count(PointClass::OnBoundary).to_string()),
            ("outside", count(PointClass::Outside).to_string()),
        ];

        info!("Classified {} points from {}", results.len(), self.points_file);
        println!("Classification summary:");
        for (key, value) in &entries {
            println!("  {}: {}", key, value);
        }

        self.logger.log_result("Classification", &entries)?;
        Ok(())
    }
}

impl<'a> Command for ClassifyCommand<'a> {
    fn execute(&self) -> BoundsResult<()> {
        let content = fs::read_to_string(&self.points_file)?;

        match &self.bounds {
            ClassifyBounds::Lla(bounds) => self.run(bounds, &content),
            ClassifyBounds::Enu(bounds) => self.run(bounds, &content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_lines_and_skips_comments() {
        let bounds: Bounds<Lla> = Bounds::new(170.0, 0.0, -170.0, 10.0);
        let content = "# lon, lat\n175 5\n\n-170, 2\n0,5\n";

        let results = classify_lines(&GeoBounds::default(), &bounds, content, &ProgressTracker::hidden()).unwrap();
        let classes: Vec<PointClass> = results.iter().map(|(_, class)| *class).collect();
        assert_eq!(classes, vec![PointClass::Inside, PointClass::OnBoundary, PointClass::Outside]);
    }

    #[test]
    fn reports_line_of_bad_input() {
        let bounds: Bounds<Enu> = Bounds::new(0.0, 0.0, 1.0, 1.0);
        let err = classify_lines(&GeoBounds::default(), &bounds, "0.5,0.5\nfoo\n", &ProgressTracker::hidden())
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
