use super::color::*;

///
/// Instructions for drawing to a canvas
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Draw {
    /// Begins a new path
    NewPath,

    /// Move to a new point
    Move(f32, f32),

    /// Line to point
    Line(f32, f32),

    /// Bezier curve to point (end point first, then the two control points)
    BezierCurve((f32, f32), (f32, f32), (f32, f32)),

    /// Closes the current path
    ClosePath,

    /// Fill the current path
    Fill,

    /// Draw a line around the current path
    Stroke,

    /// Set the line width
    LineWidth(f32),

    /// Set the line width in pixels
    LineWidthPixels(f32),

    /// Set the fill color
    FillColor(Color),

    /// Set the line color
    StrokeColor(Color),

    /// Clears the canvas entirely to a background color
    ClearCanvas(Color),

    /// Sets the canvas coordinates so that the height matches the specified value, with 0,0 in the center
    CanvasHeight(f32),

    /// Moves a region of the canvas coordinate scheme to the center of the viewport
    CenterRegion((f32, f32), (f32, f32))
}
