use super::curve::*;
use super::target::*;

use super::super::consts::*;

use itertools::*;
use log::*;

impl Bezier {
    ///
    /// Draws this curve on a target, using the method selected by the curve mode
    ///
    /// Nothing is drawn if the curve has fewer than two control points.
    ///
    pub fn draw_curve<Target: CurveTarget+?Sized>(&self, target: &mut Target) {
        if self.control_points().len() < 2 {
            trace!("Not drawing curve with {} control points", self.control_points().len());
            return;
        }

        match self.curve_mode() {
            CurveMode::Basic        => self.draw_basic(target),
            CurveMode::Subdivision  => self.draw_subdivision(target),
            CurveMode::Piecewise    => self.draw_piecewise(target)
        }
    }

    ///
    /// Draws the curve as lines between points evaluated at evenly spaced values of t
    ///
    fn draw_basic<Target: CurveTarget+?Sized>(&self, target: &mut Target) {
        if self.samples() == 0 {
            debug!("Basic curve has no samples: nothing to draw");
            return;
        }

        let step    = 1.0 / (self.samples() as f64);
        let last_t  = 1.0 + PARAMETER_TOLERANCE - step;
        let mut t   = 0.0;

        // t is accumulated rather than multiplied out so the final step lands within the tolerance of 1.0
        while t <= last_t {
            if let (Some(from), Some(to)) = (self.evaluate(t), self.evaluate(t + step)) {
                target.draw_line(from, to);
            }

            t += step;
        }
    }

    ///
    /// Draws the curve by subdividing it and drawing the control polygons of the subdivided curves
    ///
    fn draw_subdivision<Target: CurveTarget+?Sized>(&self, target: &mut Target) {
        if self.subdivision_level() == 0 {
            self.draw_control_polygon(target);
        } else {
            let (mut first_half, mut second_half) = self.subdivide();

            first_half.set_subdivision_level(self.subdivision_level() - 1);
            second_half.set_subdivision_level(self.subdivision_level() - 1);

            first_half.draw_curve(target);
            second_half.draw_curve(target);
        }
    }

    ///
    /// Draws the curve as a series of lower-degree basic curves
    ///
    fn draw_piecewise<Target: CurveTarget+?Sized>(&self, target: &mut Target) {
        let segments = self.piecewise_segments();

        trace!("Drawing {} piecewise segments with {} continuity", segments.len(), self.continuity_mode());

        for segment in segments {
            segment.draw_curve(target);
        }
    }

    ///
    /// Draws lines between each of the control points in order
    ///
    pub fn draw_control_polygon<Target: CurveTarget+?Sized>(&self, target: &mut Target) {
        for (from, to) in self.control_points().iter().tuple_windows() {
            target.draw_line(*from, *to);
        }
    }

    ///
    /// Draws the control points of this curve
    ///
    pub fn draw_control_points<Target: CurveTarget+?Sized>(&self, target: &mut Target) {
        target.draw_points(self.control_points());
    }

    ///
    /// Asks the target to prepare for drawing
    ///
    pub fn draw_setup<Target: CurveTarget+?Sized>(&self, target: &mut Target) {
        target.draw_setup();
    }
}
