/// Amount a curve parameter may overshoot 1.0 and still be evaluated (absorbs rounding when stepping t by 1/samples)
pub const PARAMETER_TOLERANCE: f64 = 0.000005;

/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Number of line segments used to draw a curve in basic mode if nothing else is specified
pub const DEFAULT_SAMPLES: usize = 20;
