use super::curve::*;

use super::super::coordinate::*;

///
/// Splits a list of control points into the segments of a piecewise curve
///
/// Each segment has `degree` edges (the last segment may have fewer). Adjacent segments share the
/// point where they join, which makes the resulting curve C0 continuous.
///
pub fn piecewise_c0_points<Point: Coordinate>(points: &[Point], degree: usize) -> Vec<Vec<Point>> {
    if points.len() < 2 {
        return vec![];
    }

    let degree          = degree.max(1);
    let num_edges       = points.len() - 1;
    let num_segments    = (num_edges + degree - 1) / degree;

    (0..num_segments)
        .map(|segment| {
            let start   = segment * degree;
            let end     = (start + degree).min(num_edges);

            points[start..=end].to_vec()
        })
        .collect()
}

///
/// Splits a list of control points into the segments of a C1 continuous piecewise curve
///
/// The segments are the same as for `piecewise_c0_points()`, except that an extra control point is
/// added on either side of each point where two segments join. The extra points are the tangent
/// control points of the quadratic curve through the join point and its two neighbours, split at
/// its midpoint, so the tangent leaving one segment points the same way as the tangent entering the
/// next. The first segment gets no leading extra point and the last segment no trailing one.
///
pub fn piecewise_c1_points<Point: Coordinate>(points: &[Point], degree: usize) -> Vec<Vec<Point>> {
    let mut segments    = piecewise_c0_points(points, degree);
    let degree          = degree.max(1);

    for boundary in 1..segments.len() {
        let join_index  = boundary * degree;
        let previous    = points[join_index-1];
        let join        = points[join_index];
        let next        = points[join_index+1];

        // Middle control point of the quadratic that passes through 'join' at t=0.5
        let mid         = join*2.0 - previous*0.5 - next*0.5;

        // Subdividing that quadratic at t=0.5 gives the control points either side of the join
        let before_join = previous*0.5 + mid*0.5;
        let after_join  = mid*0.5 + next*0.5;

        let preceding   = &mut segments[boundary-1];
        let join_pos    = preceding.len()-1;
        preceding.insert(join_pos, before_join);

        segments[boundary].insert(1, after_join);
    }

    segments
}

impl Bezier {
    ///
    /// Returns the curves that make up the piecewise version of this curve
    ///
    /// The segments are basic mode curves that inherit the sample count of this curve. The continuity
    /// mode of this curve decides whether or not extra control points are added to smooth the joins.
    ///
    pub fn piecewise_segments(&self) -> Vec<Bezier> {
        let segment_points = match self.continuity_mode() {
            ContinuityMode::C0 => piecewise_c0_points(self.control_points(), self.piecewise_degree()),
            ContinuityMode::C1 => piecewise_c1_points(self.control_points(), self.piecewise_degree())
        };

        let segment_settings = CurveSettings {
            curve_mode: CurveMode::Basic,
            samples:    self.samples(),
            ..CurveSettings::default()
        };

        segment_points.into_iter()
            .map(|points| Bezier::with_settings(points, segment_settings))
            .collect()
    }
}
