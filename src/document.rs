use super::error::*;

use flo_curves::*;
use flo_curves::bezier::*;
use flo_curves::consts::*;
use flo_canvas::*;

use serde_json;
use log::*;

use std::io::Read;

///
/// Describes a curve to render, in the form it's stored as JSON
///
/// Every field has a default, so the smallest document is just a list of control points:
/// `{ "control_points": [[0, 0], [1, 2], [2, 2], [3, 0]] }`
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveDocument {
    /// The control points of the curve as (x, y) pairs
    pub control_points:         Vec<(f64, f64)>,

    /// 'Basic', 'Subdivision' or 'Piecewise'
    pub curve_mode:             String,

    /// 'C0' or 'C1'
    pub continuity_mode:        String,

    pub subdivision_level:      usize,
    pub piecewise_degree:       usize,
    pub samples:                usize,

    /// Draws markers at each of the control points after the curve
    pub show_control_points:    bool,

    /// Draws the control polygon before the curve
    pub show_control_polygon:   bool,

    /// The colours and line sizes to draw with
    pub style:                  CurveStyle
}

impl Default for CurveDocument {
    fn default() -> CurveDocument {
        let settings = CurveSettings::default();

        CurveDocument {
            control_points:         vec![],
            curve_mode:             settings.curve_mode.to_string(),
            continuity_mode:        settings.continuity_mode.to_string(),
            subdivision_level:      settings.subdivision_level,
            piecewise_degree:       settings.piecewise_degree,
            samples:                DEFAULT_SAMPLES,
            show_control_points:    false,
            show_control_polygon:   false,
            style:                  CurveStyle::default()
        }
    }
}

impl CurveDocument {
    ///
    /// Reads a curve document from a JSON string
    ///
    pub fn from_json(json: &str) -> Result<CurveDocument, BezierToolError> {
        Ok(serde_json::from_str(json)?)
    }

    ///
    /// Reads a curve document from a stream containing JSON
    ///
    pub fn from_reader<Reader: Read>(mut reader: Reader) -> Result<CurveDocument, BezierToolError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;

        Self::from_json(&json)
    }

    ///
    /// The render settings described by this document
    ///
    pub fn settings(&self) -> Result<CurveSettings, BezierToolError> {
        Ok(CurveSettings {
            curve_mode:         self.curve_mode.parse()?,
            continuity_mode:    self.continuity_mode.parse()?,
            subdivision_level:  self.subdivision_level,
            piecewise_degree:   self.piecewise_degree,
            samples:            self.samples
        })
    }

    ///
    /// Creates the curve described by this document
    ///
    pub fn to_curve(&self) -> Result<Bezier, BezierToolError> {
        let mut builder = BezierBuilder::with_settings(self.settings()?);

        for point in self.control_points.iter() {
            builder.add_control_point(Coord2::from(*point));
        }

        Ok(builder.build())
    }

    ///
    /// Renders the curve described by this document as a list of drawing instructions
    ///
    pub fn render(&self) -> Result<Vec<Draw>, BezierToolError> {
        let curve           = self.to_curve()?;
        let mut drawing     = Vec::<Draw>::new();

        debug!("Rendering {}", curve);

        {
            let mut target  = CanvasTarget::with_style(&mut drawing, self.style);

            curve.draw_setup(&mut target);

            if self.show_control_polygon {
                curve.draw_control_polygon(&mut target);
            }

            curve.draw_curve(&mut target);

            if self.show_control_points {
                curve.draw_control_points(&mut target);
            }
        }

        info!("Generated {} drawing instructions", drawing.len());

        Ok(drawing)
    }
}
