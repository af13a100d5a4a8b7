extern crate flo_curves;

use flo_curves::*;

mod evaluate;
mod builder;
mod subdivide;

pub fn approx_equal(a: f64, b: f64) -> bool {
    f64::floor(f64::abs(a-b)*10000.0) == 0.0
}

pub fn approx_equal_points(a: Coord2, b: Coord2) -> bool {
    approx_equal(a.x(), b.x()) && approx_equal(a.y(), b.y())
}

///
/// A cubic curve with four control points that aren't collinear
///
pub fn arch() -> Vec<Coord2> {
    vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 2.0), Coord2(3.0, 0.0)]
}
