use super::basis::*;
use super::subdivide::*;
use super::derivative::*;

use super::super::consts::*;
use super::super::geo::*;
use super::super::coordinate::*;

use std::fmt;
use std::str::FromStr;

///
/// How a bezier curve is drawn
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveMode {
    /// Evaluate the curve at evenly spaced points and join them with lines
    Basic,

    /// Subdivide the curve and draw the control polygons of the pieces
    Subdivision,

    /// Split the control points into a series of lower-degree curves that are joined together
    Piecewise
}

///
/// How the segments of a piecewise curve join together
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContinuityMode {
    /// Segments share their end points
    C0,

    /// Segments share their end points and have the same tangent direction where they meet
    C1
}

///
/// Error generated when parsing the name of a curve or continuity mode
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' is not a known mode", self.0)
    }
}

impl std::error::Error for UnknownMode { }

impl Default for CurveMode {
    fn default() -> CurveMode { CurveMode::Basic }
}

impl Default for ContinuityMode {
    fn default() -> ContinuityMode { ContinuityMode::C0 }
}

impl fmt::Display for CurveMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CurveMode::Basic        => write!(f, "Basic"),
            CurveMode::Subdivision  => write!(f, "Subdivision"),
            CurveMode::Piecewise    => write!(f, "Piecewise")
        }
    }
}

impl FromStr for CurveMode {
    type Err = UnknownMode;

    fn from_str(name: &str) -> Result<CurveMode, UnknownMode> {
        match name.trim().to_lowercase().as_str() {
            "basic"         => Ok(CurveMode::Basic),
            "subdivision"   => Ok(CurveMode::Subdivision),
            "piecewise"     => Ok(CurveMode::Piecewise),
            _               => Err(UnknownMode(name.to_string()))
        }
    }
}

impl fmt::Display for ContinuityMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContinuityMode::C0 => write!(f, "C0"),
            ContinuityMode::C1 => write!(f, "C1")
        }
    }
}

impl FromStr for ContinuityMode {
    type Err = UnknownMode;

    fn from_str(name: &str) -> Result<ContinuityMode, UnknownMode> {
        match name.trim().to_uppercase().as_str() {
            "C0"    => Ok(ContinuityMode::C0),
            "C1"    => Ok(ContinuityMode::C1),
            _       => Err(UnknownMode(name.to_string()))
        }
    }
}

///
/// Settings that control how a bezier curve is rendered
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSettings {
    pub curve_mode:         CurveMode,
    pub continuity_mode:    ContinuityMode,
    pub subdivision_level:  usize,
    pub piecewise_degree:   usize,
    pub samples:            usize
}

impl Default for CurveSettings {
    fn default() -> CurveSettings {
        CurveSettings {
            curve_mode:         CurveMode::Basic,
            continuity_mode:    ContinuityMode::C0,
            subdivision_level:  0,
            piecewise_degree:   1,
            samples:            DEFAULT_SAMPLES
        }
    }
}

///
/// A bezier curve of any degree, defined by an ordered list of control points
///
/// The control points are fixed once the curve has been built (use `to_builder()` to make an edited
/// copy). The render settings can be changed at any time.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Bezier {
    control_points: Vec<Coord2>,
    settings:       CurveSettings
}

///
/// Used to build up the control points of a bezier curve
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BezierBuilder {
    control_points: Vec<Coord2>,
    settings:       CurveSettings
}

impl BezierBuilder {
    ///
    /// Creates a builder with no control points and the default settings
    ///
    pub fn new() -> BezierBuilder {
        BezierBuilder::default()
    }

    ///
    /// Creates a builder with no control points that will produce a curve with the specified settings
    ///
    pub fn with_settings(settings: CurveSettings) -> BezierBuilder {
        BezierBuilder {
            control_points: vec![],
            settings:       settings
        }
    }

    ///
    /// Creates a builder that starts with the specified list of control points
    ///
    pub fn from_points<Points: IntoIterator<Item=Coord2>>(points: Points) -> BezierBuilder {
        BezierBuilder {
            control_points: points.into_iter().collect(),
            settings:       CurveSettings::default()
        }
    }

    ///
    /// Appends a control point to the curve
    ///
    pub fn add_control_point(&mut self, point: Coord2) {
        self.control_points.push(point);
    }

    ///
    /// Appends a control point, returning the updated builder
    ///
    pub fn control_point(mut self, point: Coord2) -> Self {
        self.add_control_point(point);
        self
    }

    ///
    /// Removes the first control point equal to the specified point, returning true if one was found
    ///
    pub fn remove_control_point(&mut self, point: &Coord2) -> bool {
        if let Some(pos) = self.control_points.iter().position(|existing| existing == point) {
            self.control_points.remove(pos);
            true
        } else {
            false
        }
    }

    ///
    /// Removes all of the control points
    ///
    pub fn clear_control_points(&mut self) {
        self.control_points.clear();
    }

    ///
    /// The control points added so far
    ///
    pub fn control_points(&self) -> &[Coord2] {
        &self.control_points
    }

    pub fn curve_mode(mut self, curve_mode: CurveMode) -> Self {
        self.settings.curve_mode = curve_mode;
        self
    }

    pub fn continuity_mode(mut self, continuity_mode: ContinuityMode) -> Self {
        self.settings.continuity_mode = continuity_mode;
        self
    }

    pub fn subdivision_level(mut self, subdivision_level: usize) -> Self {
        self.settings.subdivision_level = subdivision_level;
        self
    }

    pub fn piecewise_degree(mut self, piecewise_degree: usize) -> Self {
        self.settings.piecewise_degree = piecewise_degree;
        self
    }

    pub fn samples(mut self, samples: usize) -> Self {
        self.settings.samples = samples;
        self
    }

    ///
    /// Finishes building the curve
    ///
    pub fn build(self) -> Bezier {
        Bezier {
            control_points: self.control_points,
            settings:       self.settings
        }
    }
}

///
/// Lists the control points of a curve, eg `Basic curve (0, 0) (1, 2) (3, 0)`
///
impl fmt::Display for Bezier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} curve", self.settings.curve_mode)?;

        for point in self.control_points.iter() {
            write!(f, " ({}, {})", point.x(), point.y())?;
        }

        Ok(())
    }
}

impl Geo for Bezier {
    type Point = Coord2;
}

impl Bezier {
    ///
    /// Creates a curve from a list of control points with the default settings
    ///
    pub fn from_points<Points: IntoIterator<Item=Coord2>>(points: Points) -> Bezier {
        BezierBuilder::from_points(points).build()
    }

    ///
    /// Creates a curve from a list of control points with the specified settings
    ///
    pub fn with_settings<Points: IntoIterator<Item=Coord2>>(points: Points, settings: CurveSettings) -> Bezier {
        Bezier {
            control_points: points.into_iter().collect(),
            settings:       settings
        }
    }

    ///
    /// Creates a builder containing a copy of the control points and settings of this curve
    ///
    pub fn to_builder(&self) -> BezierBuilder {
        BezierBuilder {
            control_points: self.control_points.clone(),
            settings:       self.settings
        }
    }

    ///
    /// The control points for this curve, in order
    ///
    #[inline]
    pub fn control_points(&self) -> &[Coord2] {
        &self.control_points
    }

    ///
    /// Retrieves a single control point
    ///
    #[inline]
    pub fn control_point(&self, index: usize) -> Option<Coord2> {
        self.control_points.get(index).cloned()
    }

    ///
    /// The degree of this curve (`None` if it has no control points)
    ///
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.control_points.len().checked_sub(1)
    }

    #[inline] pub fn settings(&self) -> CurveSettings { self.settings }
    #[inline] pub fn curve_mode(&self) -> CurveMode { self.settings.curve_mode }
    #[inline] pub fn continuity_mode(&self) -> ContinuityMode { self.settings.continuity_mode }
    #[inline] pub fn subdivision_level(&self) -> usize { self.settings.subdivision_level }
    #[inline] pub fn piecewise_degree(&self) -> usize { self.settings.piecewise_degree }
    #[inline] pub fn samples(&self) -> usize { self.settings.samples }

    #[inline] pub fn set_settings(&mut self, settings: CurveSettings) { self.settings = settings; }
    #[inline] pub fn set_curve_mode(&mut self, curve_mode: CurveMode) { self.settings.curve_mode = curve_mode; }
    #[inline] pub fn set_continuity_mode(&mut self, continuity_mode: ContinuityMode) { self.settings.continuity_mode = continuity_mode; }
    #[inline] pub fn set_subdivision_level(&mut self, subdivision_level: usize) { self.settings.subdivision_level = subdivision_level; }
    #[inline] pub fn set_piecewise_degree(&mut self, piecewise_degree: usize) { self.settings.piecewise_degree = piecewise_degree; }
    #[inline] pub fn set_samples(&mut self, samples: usize) { self.settings.samples = samples; }

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    /// Returns `None` if t is outside the range of the curve (or is NaN) or if there are fewer than two
    /// control points. A small overshoot past 1.0 is accepted.
    ///
    pub fn evaluate(&self, t: f64) -> Option<Coord2> {
        if !(t >= 0.0 && t <= 1.0 + PARAMETER_TOLERANCE) {
            return None;
        }

        if self.control_points.len() < 2 {
            return None;
        }

        basis(t, &self.control_points)
    }

    ///
    /// Returns the derivative of this curve at the specified t value
    ///
    pub fn tangent_at(&self, t: f64) -> Option<Coord2> {
        if !(t >= 0.0 && t <= 1.0 + PARAMETER_TOLERANCE) {
            return None;
        }

        if self.control_points.len() < 2 {
            return None;
        }

        basis(t, &derivative_points(&self.control_points))
    }

    ///
    /// Splits this curve in half, returning the two halves
    ///
    /// The halves have the same settings as this curve, and the last control point of the first half
    /// is the first control point of the second half.
    ///
    pub fn subdivide(&self) -> (Bezier, Bezier) {
        let subdivided                  = subdivide_points(&self.control_points);
        let (first_half, second_half)   = split_subdivided(&subdivided);

        (Bezier::with_settings(first_half, self.settings), Bezier::with_settings(second_half, self.settings))
    }

    ///
    /// Splits this curve in half, adding the control points of the halves to two builders
    ///
    pub fn subdivide_into(&self, first_half: &mut BezierBuilder, second_half: &mut BezierBuilder) {
        let subdivided          = subdivide_points(&self.control_points);
        let (first, second)     = split_subdivided(&subdivided);

        first.into_iter().for_each(|point| first_half.add_control_point(point));
        second.into_iter().for_each(|point| second_half.add_control_point(point));
    }
}
