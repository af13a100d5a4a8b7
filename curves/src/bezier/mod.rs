//!
//! # Bezier curves of any degree
//!
//! `Bezier` is defined by an ordered list of control points and a set of render settings. It can be
//! evaluated directly with the Bernstein basis, split in half by de Casteljau subdivision, or broken
//! into a chain of lower-degree curves that join with C0 or C1 continuity.
//!
//! Curves are drawn on anything that implements `CurveTarget`.
//!

mod basis;
mod curve;
mod render;
mod target;
mod piecewise;
mod subdivide;
mod derivative;

pub use self::basis::*;
pub use self::curve::*;
pub use self::target::*;
pub use self::piecewise::*;
pub use self::subdivide::*;
pub use self::derivative::*;
