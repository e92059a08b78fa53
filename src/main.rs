use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use geobounds::utils::logger::{level_for, Logger};
use geobounds::commands::{CommandFactory, GeoBoundsCommandFactory};

fn main() {
    let matches = ClapCommand::new("GeoBounds")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Wraparound-aware LLA/ENU bounding box tools")
        .arg(
            Arg::new("bbox")
                .long("bbox")
                .help("Bounding box (minx,miny,maxx,maxy); for lla minx > maxx wraps the antimeridian")
                .value_name("BBOX")
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("frame")
                .long("frame")
                .help("Frame of the box and points (lla or enu)")
                .value_name("FRAME")
                .default_value("lla"),
        )
        .arg(
            Arg::new("project")
                .long("project")
                .help("Compute the local ENU box enclosing an LLA box")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("center")
                .long("center")
                .help("Print the center of the box")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("reference")
                .long("reference")
                .help("Tangent point for projection as 'lon,lat[,alt]' (defaults to the box center)")
                .value_name("LON,LAT")
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("datum")
                .long("datum")
                .help("Reference ellipsoid name or custom:<a>,<1/f>")
                .value_name("NAME")
                .default_value("WGS84"),
        )
        .arg(
            Arg::new("datum-file")
                .long("datum-file")
                .help("TOML file with additional datum definitions")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("point")
                .long("point")
                .help("Classify a point 'x,y' as inside, on boundary or outside")
                .value_name("X,Y")
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("segment")
                .long("segment")
                .help("Find where segment 'x1,y1,x2,y2' crosses the box boundary")
                .value_name("X1,Y1,X2,Y2")
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("points-file")
                .long("points-file")
                .help("Classify every 'x,y' line of a file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records and results to this file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = level_for(matches.get_flag("verbose"));

    let logger = match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(&format!("{}.global", log_file), level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            match Logger::new(log_file) {
                Ok(l) => l.with_level(level),
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level.to_level_filter())
                .parse_default_env()
                .init();
            Logger::console_only()
        }
    };

    let factory = GeoBoundsCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
