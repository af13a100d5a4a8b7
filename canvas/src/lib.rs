//!
//! Drawing instructions for rendering bezier curves, and the graphics contexts that record them
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

extern crate flo_curves;
extern crate log;

mod gc;
mod draw;
mod color;
mod canvas_target;

pub use self::gc::*;
pub use self::draw::*;
pub use self::color::*;
pub use self::canvas_target::*;
