use super::super::geo::*;
use super::super::coordinate::*;

///
/// Represents a straight line
///
pub trait Line : Geo {
    ///
    /// Creates a new line from points
    ///
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self;

    ///
    /// Returns the two points that mark the start and end of this line
    ///
    fn points(&self) -> (Self::Point, Self::Point);

    ///
    /// Returns the length of this line
    ///
    #[inline]
    fn length(&self) -> f64 {
        let (p1, p2) = self.points();
        p1.distance_to(&p2)
    }

    ///
    /// Given a value t from 0 to 1, returns a point on this line
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Self::Point {
        let (p1, p2) = self.points();
        p1.lerp(&p2, t)
    }
}

impl<Point: Coordinate+Clone> Geo for (Point, Point) {
    type Point = Point;
}

///
/// Simplest line is just a tuple of two points
///
impl<Point: Coordinate+Clone> Line for (Point, Point) {
    #[inline]
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self {
        (p1, p2)
    }

    #[inline]
    fn points(&self) -> (Self::Point, Self::Point) {
        self.clone()
    }
}
