use super::super::line::*;
use super::super::coordinate::*;

///
/// A surface that bezier curves can be drawn on
///
/// Curves are rendered as a series of straight lines. Control points are sent as a single set so
/// the surface can decide how to mark them.
///
pub trait CurveTarget {
    ///
    /// Prepares the surface for drawing
    ///
    fn draw_setup(&mut self);

    ///
    /// Draws a straight line between two points
    ///
    fn draw_line(&mut self, from: Coord2, to: Coord2);

    ///
    /// Draws a set of points
    ///
    fn draw_points(&mut self, points: &[Coord2]);
}

///
/// A list of lines can act as a target that records the lines drawn on it
///
/// Points and setup requests are ignored.
///
impl<L: Line<Point=Coord2>> CurveTarget for Vec<L> {
    #[inline]
    fn draw_setup(&mut self) { }

    #[inline]
    fn draw_line(&mut self, from: Coord2, to: Coord2) {
        self.push(L::from_points(from, to));
    }

    #[inline]
    fn draw_points(&mut self, _points: &[Coord2]) { }
}
