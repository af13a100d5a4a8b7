use super::error::*;

use flo_canvas::*;

use serde_json;

use std::io::Write;
use std::str::FromStr;

///
/// The formats that a rendered curve can be written in
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// The drawing instructions as a JSON array
    Json,

    /// One drawing instruction per line
    Lines
}

impl FromStr for OutputFormat {
    type Err = BezierToolError;

    fn from_str(name: &str) -> Result<OutputFormat, BezierToolError> {
        match name {
            "json"  => Ok(OutputFormat::Json),
            "lines" => Ok(OutputFormat::Lines),
            _       => Err(BezierToolError::UnknownFormat(name.to_string()))
        }
    }
}

///
/// Describes a single drawing instruction as a line of text
///
fn describe_draw(draw: &Draw) -> String {
    use self::Draw::*;

    match draw {
        NewPath             => "new_path".to_string(),
        Move(x, y)          => format!("move {} {}", x, y),
        Line(x, y)          => format!("line {} {}", x, y),
        ClosePath           => "close_path".to_string(),
        Fill                => "fill".to_string(),
        Stroke              => "stroke".to_string(),
        LineWidth(width)    => format!("line_width {}", width),
        FillColor(col)      => format!("fill_color {}", col.to_hex()),
        StrokeColor(col)    => format!("stroke_color {}", col.to_hex()),
        ClearCanvas(col)    => format!("clear_canvas {}", col.to_hex())
    }
}

///
/// Writes out a list of drawing instructions in the specified format
///
pub fn write_drawing<Target: Write>(drawing: &[Draw], format: OutputFormat, mut target: Target) -> Result<(), BezierToolError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut target, drawing)?;
            writeln!(target)?;
        }

        OutputFormat::Lines => {
            for draw in drawing.iter() {
                writeln!(target, "{}", describe_draw(draw))?;
            }
        }
    }

    Ok(())
}
