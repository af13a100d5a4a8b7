use super::super::coordinate::*;

use itertools::*;

///
/// Subdivides the control polygon of a bezier curve at its midpoint
///
/// The result contains `2n-1` points: the first `n` are the control points of the first half of the
/// curve and the last `n` are the control points of the second half, with the point where the halves
/// join appearing once in the middle.
///
pub fn subdivide_points<Point: Coordinate>(points: &[Point]) -> Vec<Point> {
    if points.len() <= 1 {
        return points.to_vec();
    }

    // Average each pair of adjacent points and subdivide the shorter polygon that results
    let midpoints: Vec<_>   = points.iter()
        .tuple_windows()
        .map(|(p1, p2)| (*p1 * 0.5) + (*p2 * 0.5))
        .collect();
    let inner               = subdivide_points(&midpoints);

    // The outermost points are unchanged by subdivision
    let mut result          = Vec::with_capacity(points.len()*2 - 1);
    result.push(points[0]);
    result.extend(inner);
    result.push(points[points.len()-1]);

    result
}

///
/// Splits the result of `subdivide_points()` into the control points of the two halves of the curve
///
/// Both halves include the middle point, so the end of the first half is the start of the second.
///
pub fn split_subdivided<Point: Coordinate>(subdivided: &[Point]) -> (Vec<Point>, Vec<Point>) {
    if subdivided.is_empty() {
        return (vec![], vec![]);
    }

    let mid = subdivided.len()/2;

    (subdivided[0..=mid].to_vec(), subdivided[mid..].to_vec())
}
