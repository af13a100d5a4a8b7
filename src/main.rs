//!
//! # flo_bezier
//!
//! Reads a curve document, renders the bezier curve it describes and writes out the drawing
//! instructions that result.
//!

extern crate serde;
extern crate serde_json;

#[macro_use]
extern crate serde_derive;

extern crate log;
extern crate env_logger;
extern crate clap;
extern crate flo_curves;
extern crate flo_canvas;

mod error;
mod output;
mod options;
mod document;

use self::error::*;
use self::output::*;
use self::options::*;
use self::document::*;

use clap::ArgMatches;
use log::*;

use std::io;
use std::fs;
use std::process;
use std::str::FromStr;

///
/// Loads, renders and writes out the curve described by the command line parameters
///
fn run(params: &ArgMatches) -> Result<(), BezierToolError> {
    let format          = OutputFormat::from_str(params.value_of("format").unwrap_or("json"))?;

    // Read the document from the input file or stdin
    let mut document    = match params.value_of("INPUT") {
        Some(path)  => {
            debug!("Reading curve document from {}", path);
            CurveDocument::from_reader(fs::File::open(path)?)?
        }

        None        => {
            debug!("Reading curve document from standard input");
            CurveDocument::from_reader(io::stdin())?
        }
    };

    // Command line settings take priority over the document
    apply_options(params, &mut document)?;

    let drawing         = document.render()?;

    let stdout          = io::stdout();
    write_drawing(&drawing, format, stdout.lock())
}

fn main() {
    env_logger::init();

    let params = command_line().get_matches();

    if let Err(err) = run(&params) {
        error!("{}", err);
        process::exit(1);
    }
}
