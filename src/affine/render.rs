use super::style::*;

use hex_transform::*;
use hex_canvas::*;

///
/// Draws the background grid: vertical and horizontal rules across the whole view
///
pub fn draw_grid(gc: &mut dyn GraphicsPrimitives) {
    gc.stroke_color(GRID_LINE);
    gc.line_width(0.5);

    let mut x = 0.0;
    while x < VIEW_WIDTH {
        gc.new_path();
        gc.move_to(x, 0.0);
        gc.line_to(x, VIEW_HEIGHT);
        gc.stroke();

        x += GRID_STEP;
    }

    let mut y = 0.0;
    while y < VIEW_HEIGHT {
        gc.new_path();
        gc.move_to(0.0, y);
        gc.line_to(VIEW_WIDTH, y);
        gc.stroke();

        y += GRID_STEP;
    }
}

///
/// Draws the figure: a stroked and filled polygon with a marker over every vertex
///
pub fn draw_shape(gc: &mut dyn GraphicsPrimitives, shape: &Shape) {
    // Outline and translucent fill
    gc.new_path();
    gc.polygon(shape);

    gc.stroke_color(SHAPE_STROKE);
    gc.line_width(3.0);
    gc.stroke();

    gc.fill_color(SHAPE_STROKE.with_alpha(0.1));
    gc.fill();

    // Vertex markers
    for point in shape.points() {
        gc.new_path();
        gc.circle(point.x() as f32, point.y() as f32, MARKER_RADIUS);

        gc.fill_color(MARKER_FILL);
        gc.fill();

        gc.stroke_color(MARKER_STROKE);
        gc.line_width(1.0);
        gc.stroke();
    }
}

///
/// Renders one complete frame for a shape
///
pub fn draw_frame(gc: &mut dyn GraphicsPrimitives, shape: &Shape) {
    // Start from a blank view that shows the whole scene
    gc.clear_canvas(BACKGROUND);
    gc.canvas_height(VIEW_HEIGHT);
    gc.center_region(0.0, 0.0, VIEW_WIDTH, VIEW_HEIGHT);

    draw_grid(gc);
    draw_shape(gc, shape);
}
