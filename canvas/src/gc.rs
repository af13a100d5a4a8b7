use super::draw::*;
use super::color::*;

///
/// A graphics context provides the basic set of graphics actions that can be performed
///
pub trait GraphicsContext {
    fn new_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn line_width(&mut self, width: f32);
    fn fill_color(&mut self, col: Color);
    fn stroke_color(&mut self, col: Color);
    fn clear_canvas(&mut self, color: Color);

    fn draw(&mut self, d: Draw) {
        use self::Draw::*;

        match d {
            NewPath             => self.new_path(),
            Move(x, y)          => self.move_to(x, y),
            Line(x, y)          => self.line_to(x, y),
            ClosePath           => self.close_path(),
            Fill                => self.fill(),
            Stroke              => self.stroke(),
            LineWidth(width)    => self.line_width(width),
            FillColor(col)      => self.fill_color(col),
            StrokeColor(col)    => self.stroke_color(col),
            ClearCanvas(color)  => self.clear_canvas(color)
        }
    }

    fn draw_list<'a>(&'a mut self, drawing: Box<dyn 'a+Iterator<Item=Draw>>) {
        for d in drawing {
            self.draw(d);
        }
    }
}

///
/// GraphicsPrimitives adds new primitives that can be built directly from a graphics context
///
pub trait GraphicsPrimitives : GraphicsContext {
    ///
    /// Draws a rectangle between particular coordinates
    ///
    fn rect(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        for d in draw_rect(x1, y1, x2, y2) {
            self.draw(d);
        }
    }

    ///
    /// Draws a line between two points as its own path
    ///
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.new_path();
        self.move_to(x1, y1);
        self.line_to(x2, y2);
        self.stroke();
    }
}

///
/// Returns the drawing commands for a rectangle
///
pub fn draw_rect(x1: f32, y1: f32, x2: f32, y2: f32) -> Vec<Draw> {
    use self::Draw::*;

    vec![
        Move(x1, y1),
        Line(x1, y2),
        Line(x2, y2),
        Line(x2, y1),
        Line(x1, y1),
        ClosePath
    ]
}

///
/// A Vec<Draw> can be treated as a target for graphics primitives (just pushing the appropriate draw instructions)
///
impl GraphicsContext for Vec<Draw> {
    #[inline] fn new_path(&mut self)                    { self.push(Draw::NewPath); }
    #[inline] fn move_to(&mut self, x: f32, y: f32)     { self.push(Draw::Move(x, y)); }
    #[inline] fn line_to(&mut self, x: f32, y: f32)     { self.push(Draw::Line(x, y)); }
    #[inline] fn close_path(&mut self)                  { self.push(Draw::ClosePath); }
    #[inline] fn fill(&mut self)                        { self.push(Draw::Fill); }
    #[inline] fn stroke(&mut self)                      { self.push(Draw::Stroke); }
    #[inline] fn line_width(&mut self, width: f32)      { self.push(Draw::LineWidth(width)); }
    #[inline] fn fill_color(&mut self, col: Color)      { self.push(Draw::FillColor(col)); }
    #[inline] fn stroke_color(&mut self, col: Color)    { self.push(Draw::StrokeColor(col)); }
    #[inline] fn clear_canvas(&mut self, color: Color)  { self.push(Draw::ClearCanvas(color)); }

    #[inline]
    fn draw(&mut self, d: Draw) {
        self.push(d);
    }

    #[inline]
    fn draw_list<'b>(&'b mut self, drawing: Box<dyn 'b+Iterator<Item=Draw>>) {
        self.extend(drawing)
    }
}

impl GraphicsPrimitives for Vec<Draw> {

}
