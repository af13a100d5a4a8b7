use super::gc::*;
use super::color::*;

use flo_curves::*;

use log::*;

///
/// The colours and sizes used when drawing curves on a graphics context
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CurveStyle {
    /// Colour the canvas is cleared to during setup
    pub background:     Color,

    /// Colour of the lines making up the curve
    pub line_color:     Color,

    /// Width of the lines making up the curve
    pub line_width:     f32,

    /// Colour of control point markers
    pub point_color:    Color,

    /// Distance from the centre of a control point marker to its edge
    pub point_radius:   f32
}

impl Default for CurveStyle {
    fn default() -> CurveStyle {
        CurveStyle {
            background:     Color::Rgba(1.0, 1.0, 1.0, 1.0),
            line_color:     Color::Rgba(0.0, 0.0, 0.0, 1.0),
            line_width:     1.0,
            point_color:    Color::Rgba(0.8, 0.1, 0.1, 1.0),
            point_radius:   3.0
        }
    }
}

///
/// Adapts a graphics context so that bezier curves can be drawn on it
///
/// Every line is drawn as a separate stroked path. Control points are drawn as filled squares.
///
pub struct CanvasTarget<'a, Gc: GraphicsPrimitives+?Sized> {
    gc:     &'a mut Gc,
    style:  CurveStyle
}

impl<'a, Gc: GraphicsPrimitives+?Sized> CanvasTarget<'a, Gc> {
    ///
    /// Creates a target that draws on a graphics context using the default style
    ///
    pub fn new(gc: &'a mut Gc) -> CanvasTarget<'a, Gc> {
        Self::with_style(gc, CurveStyle::default())
    }

    ///
    /// Creates a target that draws on a graphics context using a particular style
    ///
    pub fn with_style(gc: &'a mut Gc, style: CurveStyle) -> CanvasTarget<'a, Gc> {
        CanvasTarget {
            gc:     gc,
            style:  style
        }
    }

    ///
    /// The style used by this target
    ///
    pub fn style(&self) -> CurveStyle {
        self.style
    }
}

impl<'a, Gc: GraphicsPrimitives+?Sized> CurveTarget for CanvasTarget<'a, Gc> {
    fn draw_setup(&mut self) {
        self.gc.clear_canvas(self.style.background);
        self.gc.line_width(self.style.line_width);
        self.gc.stroke_color(self.style.line_color);
    }

    fn draw_line(&mut self, from: Coord2, to: Coord2) {
        self.gc.line(from.x() as f32, from.y() as f32, to.x() as f32, to.y() as f32);
    }

    fn draw_points(&mut self, points: &[Coord2]) {
        trace!("Drawing {} control points", points.len());

        let radius = self.style.point_radius;

        self.gc.fill_color(self.style.point_color);
        for point in points {
            let (x, y) = (point.x() as f32, point.y() as f32);

            self.gc.new_path();
            self.gc.rect(x-radius, y-radius, x+radius, y+radius);
            self.gc.fill();
        }
    }
}

///
/// Draws a bezier curve on a graphics context using the default style
///
pub fn gc_draw_bezier<Gc: GraphicsPrimitives+?Sized>(gc: &mut Gc, curve: &Bezier) {
    curve.draw_curve(&mut CanvasTarget::new(gc));
}
