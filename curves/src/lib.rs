//!
//! # flo_curves
//!
//! Evaluates, subdivides and renders bezier curves defined by any number of 2D control points.
//!
#![warn(bare_trait_objects)]

extern crate itertools;
extern crate log;

pub mod bezier;
pub mod line;
pub mod consts;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::{Bezier, BezierBuilder, CurveTarget};
pub use self::line::Line;
