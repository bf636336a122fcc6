use super::coordinate::*;
use super::shape::*;

use std::f64;

///
/// Moves every vertex of a shape by the offset (dx, dy)
///
pub fn translate(shape: &Shape, dx: f64, dy: f64) -> Shape {
    Shape(shape.points()
        .map(|&Point2(x, y)| Point2(x + dx, y + dy))
        .collect())
}

///
/// Rotates every vertex of a shape by an angle in degrees around the pivot (cx, cy)
///
/// Positive angles turn counter-clockwise in standard math coordinates, which
/// reads as clockwise on a screen whose Y axis grows downward.
///
pub fn rotate(shape: &Shape, angle_deg: f64, cx: f64, cy: f64) -> Shape {
    // One conversion per call, so every vertex sees the same basis
    let theta = angle_deg * f64::consts::PI / 180.0;
    let cos_t = theta.cos();
    let sin_t = theta.sin();

    Shape(shape.points()
        .map(|&Point2(x, y)| {
            let x0 = x - cx;
            let y0 = y - cy;

            let x1 = x0*cos_t - y0*sin_t;
            let y1 = x0*sin_t + y0*cos_t;

            Point2(x1 + cx, y1 + cy)
        })
        .collect())
}

///
/// Scales every vertex of a shape by the per-axis factors (kx, ky) relative to the pivot (cx, cy)
///
/// Negative factors mirror the shape across the pivot on that axis; a factor of
/// zero collapses that axis onto the pivot's coordinate.
///
pub fn scale(shape: &Shape, kx: f64, ky: f64, cx: f64, cy: f64) -> Shape {
    Shape(shape.points()
        .map(|&Point2(x, y)| Point2((x - cx)*kx + cx, (y - cy)*ky + cy))
        .collect())
}

///
/// A transform operation together with its parameters, in the form it crosses the wire
///
/// Serializes as `{"op": "rotate", "params": {"angle": 45.0, "cx": 350.0, "cy": 200.0}}`,
/// the request format shared by every collaborator that calls into the engine.
/// A local call and a remote round trip describe the same operation this way.
///
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
#[serde(tag = "op", content = "params", rename_all = "lowercase")]
pub enum TransformOp {
    /// Move by an offset
    Translate { dx: f64, dy: f64 },

    /// Turn around a pivot by an angle in degrees (counter-clockwise positive)
    Rotate { angle: f64, cx: f64, cy: f64 },

    /// Resize per axis around a pivot
    Scale { kx: f64, ky: f64, cx: f64, cy: f64 }
}

impl TransformOp {
    ///
    /// Applies this operation to a shape, returning the transformed shape
    ///
    pub fn apply(&self, shape: &Shape) -> Shape {
        match self {
            &TransformOp::Translate { dx, dy }      => translate(shape, dx, dy),
            &TransformOp::Rotate { angle, cx, cy }  => rotate(shape, angle, cx, cy),
            &TransformOp::Scale { kx, ky, cx, cy }  => scale(shape, kx, ky, cx, cy)
        }
    }

    ///
    /// True if every parameter of this operation is a finite number
    ///
    /// The operations themselves are total over the reals, so this is the check
    /// a caller makes to turn away out-of-contract parameters before they reach
    /// a shape.
    ///
    pub fn is_finite(&self) -> bool {
        match self {
            &TransformOp::Translate { dx, dy }      => dx.is_finite() && dy.is_finite(),
            &TransformOp::Rotate { angle, cx, cy }  => angle.is_finite() && cx.is_finite() && cy.is_finite(),
            &TransformOp::Scale { kx, ky, cx, cy }  => kx.is_finite() && ky.is_finite() && cx.is_finite() && cy.is_finite()
        }
    }
}
