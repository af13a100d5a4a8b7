use super::error::*;
use super::document::*;

use clap::{App, Arg, ArgMatches};

use std::str::FromStr;

///
/// Describes the command line parameters for the tool
///
pub fn command_line<'a, 'b>() -> App<'a, 'b> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(concat!("The input is a JSON document such as:\n",
            "\n",
            "    { \"control_points\": [[0, 0], [1, 2], [2, 2], [3, 0]], \"curve_mode\": \"Subdivision\", \"subdivision_level\": 3 }\n",
            "\n",
            "Set RUST_LOG=debug to see how the curve is being rendered.\n"))
        .arg(Arg::with_name("INPUT")
            .help("The curve document to read (standard input is read if no file is specified)")
            .required(false)
            .index(1))
        .arg(Arg::with_name("mode")
            .long("mode")
            .short("m")
            .takes_value(true)
            .possible_values(&["Basic", "Subdivision", "Piecewise"])
            .case_insensitive(true)
            .help("How the curve is drawn"))
        .arg(Arg::with_name("continuity")
            .long("continuity")
            .short("c")
            .takes_value(true)
            .possible_values(&["C0", "C1"])
            .case_insensitive(true)
            .help("How the segments of a piecewise curve join together"))
        .arg(Arg::with_name("subdivisions")
            .long("subdivisions")
            .short("s")
            .takes_value(true)
            .help("Number of times to subdivide the curve in subdivision mode"))
        .arg(Arg::with_name("degree")
            .long("degree")
            .short("d")
            .takes_value(true)
            .help("Number of edges in each segment of a piecewise curve"))
        .arg(Arg::with_name("samples")
            .long("samples")
            .short("n")
            .takes_value(true)
            .help("Number of lines used to draw a basic curve"))
        .arg(Arg::with_name("show-control-points")
            .long("show-control-points")
            .help("Also draws markers at the control points"))
        .arg(Arg::with_name("show-control-polygon")
            .long("show-control-polygon")
            .help("Also draws the control polygon"))
        .arg(Arg::with_name("format")
            .long("format")
            .short("f")
            .takes_value(true)
            .default_value("json")
            .help("The output format: 'json' for a list of drawing instructions or 'lines' for a text listing"))
}

///
/// Reads a numeric parameter, if it's present
///
fn number_param(params: &ArgMatches, name: &str) -> Result<Option<usize>, BezierToolError> {
    match params.value_of(name) {
        None        => Ok(None),
        Some(value) => usize::from_str(value)
            .map(Some)
            .map_err(|_| BezierToolError::InvalidNumber(name.to_string(), value.to_string()))
    }
}

///
/// Updates a curve document with the settings from the command line
///
pub fn apply_options(params: &ArgMatches, document: &mut CurveDocument) -> Result<(), BezierToolError> {
    if let Some(mode) = params.value_of("mode") {
        document.curve_mode = mode.to_string();
    }

    if let Some(continuity) = params.value_of("continuity") {
        document.continuity_mode = continuity.to_string();
    }

    if let Some(subdivisions) = number_param(params, "subdivisions")? {
        document.subdivision_level = subdivisions;
    }

    if let Some(degree) = number_param(params, "degree")? {
        document.piecewise_degree = degree;
    }

    if let Some(samples) = number_param(params, "samples")? {
        document.samples = samples;
    }

    if params.is_present("show-control-points") {
        document.show_control_points = true;
    }

    if params.is_present("show-control-polygon") {
        document.show_control_polygon = true;
    }

    Ok(())
}
