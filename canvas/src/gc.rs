use super::draw::*;
use super::color::*;

use transform::*;

use std::iter;

/// Control point distance for approximating a quarter circle with a cubic bezier section
const CIRCLE_KAPPA: f32 = 0.5522848;

///
/// One method per drawing instruction, for anything that can accept a drawing
///
pub trait GraphicsContext {
    fn new_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn bezier_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn line_width(&mut self, width: f32);
    fn line_width_pixels(&mut self, width: f32);
    fn fill_color(&mut self, col: Color);
    fn stroke_color(&mut self, col: Color);
    fn clear_canvas(&mut self, color: Color);
    fn canvas_height(&mut self, height: f32);
    fn center_region(&mut self, minx: f32, miny: f32, maxx: f32, maxy: f32);

    fn draw(&mut self, d: Draw) {
        use self::Draw::*;

        match d {
            NewPath                                     => self.new_path(),
            Move(x, y)                                  => self.move_to(x, y),
            Line(x, y)                                  => self.line_to(x, y),
            BezierCurve((x1, y1), (x2, y2), (x3, y3))   => self.bezier_curve_to(x1, y1, x2, y2, x3, y3),
            ClosePath                                   => self.close_path(),
            Fill                                        => self.fill(),
            Stroke                                      => self.stroke(),
            LineWidth(width)                            => self.line_width(width),
            LineWidthPixels(width)                      => self.line_width_pixels(width),
            FillColor(col)                              => self.fill_color(col),
            StrokeColor(col)                            => self.stroke_color(col),
            ClearCanvas(color)                          => self.clear_canvas(color),
            CanvasHeight(height)                        => self.canvas_height(height),
            CenterRegion((minx, miny), (maxx, maxy))    => self.center_region(minx, miny, maxx, maxy)
        }
    }

    fn draw_list<'a>(&'a mut self, drawing: Box<dyn 'a+Iterator<Item=Draw>>) {
        for d in drawing {
            self.draw(d);
        }
    }
}

///
/// Higher-level shapes, built on the instructions a graphics context accepts
///
pub trait GraphicsPrimitives : GraphicsContext {
    ///
    /// Draws a rectangle spanning two corner points
    ///
    fn rect(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        for d in draw_rect(x1, y1, x2, y2) {
            self.draw(d);
        }
    }

    ///
    /// Draws a circle with a particular center and radius
    ///
    fn circle(&mut self, center_x: f32, center_y: f32, radius: f32) {
        for d in draw_circle(center_x, center_y, radius) {
            self.draw(d);
        }
    }

    ///
    /// Draws a closed polygon from its vertex sequence
    ///
    fn polygon(&mut self, polygon: &Shape) {
        for d in draw_polygon(polygon) {
            self.draw(d);
        }
    }
}

///
/// The instruction sequence for a rectangle
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
/// The instruction sequence for a circle
///
/// The circle is built from four bezier sections, starting from the point to
/// the right of the center.
///
pub fn draw_circle(center_x: f32, center_y: f32, radius: f32) -> Vec<Draw> {
    use self::Draw::*;

    let (x, y)  = (center_x, center_y);
    let r       = radius;
    let k       = CIRCLE_KAPPA * radius;

    vec![
        Move(x+r, y),
        BezierCurve((x, y+r), (x+r, y+k), (x+k, y+r)),
        BezierCurve((x-r, y), (x-k, y+r), (x-r, y+k)),
        BezierCurve((x, y-r), (x-r, y-k), (x-k, y-r)),
        BezierCurve((x+r, y), (x+k, y-r), (x+r, y-k)),
        ClosePath
    ]
}

///
/// Returns the drawing commands for a closed polygon
///
/// The vertices are joined in sequence order and the path is closed back to the
/// first vertex. A polygon with no vertices produces no commands at all.
///
pub fn draw_polygon(polygon: &Shape) -> Vec<Draw> {
    use self::Draw::*;

    let mut points = polygon.points();

    if let Some(start) = points.next() {
        let path = iter::once(Move(start.x() as f32, start.y() as f32))
            .chain(points.map(|point| Line(point.x() as f32, point.y() as f32)))
            .chain(iter::once(ClosePath));

        path.collect()
    } else {
        vec![]
    }
}

///
/// A Vec<Draw> records a drawing rather than rendering it, which is also what
/// the tests use to inspect instruction sequences
///
impl GraphicsContext for Vec<Draw> {
    #[inline] fn new_path(&mut self)                                                    { self.push(Draw::NewPath); }
    #[inline] fn move_to(&mut self, x: f32, y: f32)                                     { self.push(Draw::Move(x, y)); }
    #[inline] fn line_to(&mut self, x: f32, y: f32)                                     { self.push(Draw::Line(x, y)); }
    #[inline] fn bezier_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) { self.push(Draw::BezierCurve((x1, y1), (x2, y2), (x3, y3))); }
    #[inline] fn close_path(&mut self)                                                  { self.push(Draw::ClosePath); }
    #[inline] fn fill(&mut self)                                                        { self.push(Draw::Fill); }
    #[inline] fn stroke(&mut self)                                                      { self.push(Draw::Stroke); }
    #[inline] fn line_width(&mut self, width: f32)                                      { self.push(Draw::LineWidth(width)); }
    #[inline] fn line_width_pixels(&mut self, width: f32)                               { self.push(Draw::LineWidthPixels(width)); }
    #[inline] fn fill_color(&mut self, col: Color)                                      { self.push(Draw::FillColor(col)); }
    #[inline] fn stroke_color(&mut self, col: Color)                                    { self.push(Draw::StrokeColor(col)); }
    #[inline] fn clear_canvas(&mut self, color: Color)                                  { self.push(Draw::ClearCanvas(color)); }
    #[inline] fn canvas_height(&mut self, height: f32)                                  { self.push(Draw::CanvasHeight(height)); }
    #[inline] fn center_region(&mut self, minx: f32, miny: f32, maxx: f32, maxy: f32)   { self.push(Draw::CenterRegion((minx, miny), (maxx, maxy))); }

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
