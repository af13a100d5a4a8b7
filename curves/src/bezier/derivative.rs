use super::super::coordinate::*;

use itertools::*;

///
/// Returns the control points of the 1st derivative (the hodograph) of a bezier curve of any degree
///
/// A curve of degree m has a derivative of degree m-1 with the points `m*(P[i+1]-P[i])`
///
pub fn derivative_points<Point: Coordinate>(points: &[Point]) -> Vec<Point> {
    if points.len() < 2 {
        return vec![];
    }

    let degree = (points.len() - 1) as f64;

    points.iter()
        .tuple_windows()
        .map(|(p1, p2)| (*p2 - *p1) * degree)
        .collect()
}
