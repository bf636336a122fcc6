use hex_canvas::*;

/// Size of the view in canvas units
pub const VIEW_WIDTH: f32       = 700.0;
pub const VIEW_HEIGHT: f32      = 500.0;

/// Spacing between the rules of the background grid
pub const GRID_STEP: f32        = 50.0;

/// Radius of the circular marker drawn over every vertex
pub const MARKER_RADIUS: f32    = 4.0;

pub const BACKGROUND: Color     = Color::Rgba(1.0, 1.0, 1.0, 1.0);
pub const GRID_LINE: Color      = Color::Rgba(0.878, 0.878, 0.878, 1.0);
pub const SHAPE_STROKE: Color   = Color::Rgba(0.227, 0.525, 1.0, 1.0);
pub const MARKER_FILL: Color    = Color::Rgba(1.0, 0.745, 0.043, 1.0);
pub const MARKER_STROKE: Color  = Color::Rgba(0.2, 0.2, 0.2, 1.0);
