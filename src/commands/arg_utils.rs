//! Shared argument handling for commands

use clap::ArgMatches;
use log::debug;

use crate::coordinate::{Datum, DatumDefinitions, DatumFactory, PlanarPoint};
use crate::errors::{BoundsError, BoundsResult};
use crate::utils::coordinate_utils::parse_values;

/// Coordinate frame the user's bounds and points are given in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Longitude/latitude in degrees
    Lla,
    /// East/north in metres
    Enu,
}

impl Frame {
    pub fn from_string(frame: &str) -> BoundsResult<Self> {
        match frame.trim().to_lowercase().as_str() {
            "lla" | "geodetic" | "wgs84" => Ok(Frame::Lla),
            "enu" | "local" => Ok(Frame::Enu),
            other => Err(BoundsError::ParseError(format!("Unknown frame '{}', expected lla or enu", other))),
        }
    }
}

/// Fetch a required string argument
pub fn required_arg(args: &ArgMatches, name: &str) -> BoundsResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| BoundsError::GenericError(format!("Missing --{} argument", name)))
}

/// Frame selected with --frame (defaults to lla)
pub fn frame_arg(args: &ArgMatches) -> BoundsResult<Frame> {
    match args.get_one::<String>("frame") {
        Some(frame) => Frame::from_string(frame),
        None => Ok(Frame::Lla),
    }
}

/// Datum selected with --datum, looked up in --datum-file first when given
pub fn datum_arg(args: &ArgMatches) -> BoundsResult<Datum> {
    let extra = match args.get_one::<String>("datum-file") {
        Some(path) => {
            debug!("Loading datum definitions from {}", path);
            Some(DatumDefinitions::from_file(path)?)
        }
        None => None,
    };

    match args.get_one::<String>("datum") {
        Some(name) => DatumFactory::from_string(name, extra.as_ref()),
        None => Ok(Datum::wgs84()),
    }
}

/// Parse "x,y" (an optional third value is ignored) into a planar point
pub fn parse_point<T: PlanarPoint>(text: &str) -> BoundsResult<T> {
    let values = parse_values(text, 2, 3)?;
    Ok(T::from_planar(values[0], values[1]))
}

/// Parse "x1,y1,x2,y2" into two planar points
pub fn parse_segment<T: PlanarPoint>(text: &str) -> BoundsResult<(T, T)> {
    let values = parse_values(text, 4, 4)?;
    Ok((T::from_planar(values[0], values[1]), T::from_planar(values[2], values[3])))
}
