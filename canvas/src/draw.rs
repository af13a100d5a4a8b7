use super::color::*;

///
/// Instructions for drawing to a canvas
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Draw {
    /// Begins a new path
    NewPath,

    /// Move to a new point
    Move(f32, f32),

    /// Line to point
    Line(f32, f32),

    /// Closes the current path
    ClosePath,

    /// Fill the current path
    Fill,

    /// Draw a line around the current path
    Stroke,

    /// Set the line width
    LineWidth(f32),

    /// Set the fill color
    FillColor(Color),

    /// Set the line color
    StrokeColor(Color),

    /// Clears the canvas, filling it with the specified colour
    ClearCanvas(Color)
}
