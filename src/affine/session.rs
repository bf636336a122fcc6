use super::render::*;

use hex_transform::*;
use hex_canvas::*;

use log::*;

use std::fmt;
use std::error::Error;

///
/// Possible error from updating a session
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionError {
    /// A transform parameter was NaN or infinite
    NonFiniteParameter
}

impl fmt::Display for SessionError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionError::NonFiniteParameter => write!(formatter, "Transform parameters must be finite numbers")
        }
    }
}

impl Error for SessionError { }

///
/// An editing session: the shape as it currently stands, plus the canvas it
/// is displayed on
///
/// Updates go through `&mut self`, so two changes can never interleave: the
/// second caller waits until the first has finished redrawing. The engine
/// functions themselves stay freely callable from anywhere.
///
pub struct AffineSession {
    /// The vertices as they currently stand
    shape: Shape,

    /// Where the shape is displayed after every update
    canvas: Canvas
}

impl AffineSession {
    ///
    /// Creates a session showing the original shape
    ///
    pub fn new() -> AffineSession {
        let session = AffineSession {
            shape:  original_shape(),
            canvas: Canvas::new()
        };

        session.redraw();
        session
    }

    ///
    /// The vertices as they currently stand
    ///
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    ///
    /// The canvas this session displays on
    ///
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    ///
    /// Applies an operation to the shape, then redraws it
    ///
    /// Operations with non-finite parameters are rejected and leave both the
    /// shape and the canvas exactly as they were.
    ///
    pub fn apply(&mut self, op: &TransformOp) -> Result<&Shape, SessionError> {
        if !op.is_finite() {
            warn!("Rejecting {:?}: parameters must be finite", op);

            return Err(SessionError::NonFiniteParameter);
        }

        debug!("Applying {:?}", op);

        self.shape = op.apply(&self.shape);
        self.redraw();

        Ok(&self.shape)
    }

    ///
    /// Puts the original shape back and redraws it
    ///
    pub fn reset(&mut self) -> &Shape {
        debug!("Resetting to the original shape");

        self.shape = original_shape();
        self.redraw();

        &self.shape
    }

    ///
    /// Redraws the current shape as one complete frame
    ///
    fn redraw(&self) {
        let shape = self.shape.clone();

        self.canvas.draw(move |gc| draw_frame(gc, &shape));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::style::*;

    #[test]
    fn new_session_shows_the_original_shape() {
        let session = AffineSession::new();

        assert!(*session.shape() == original_shape());

        let drawing = session.canvas().get_drawing();

        assert!(drawing[0] == Draw::ClearCanvas(BACKGROUND));
        assert!(drawing.iter().any(|draw| *draw == Draw::Move(350.0, 200.0)));
    }

    #[test]
    fn apply_replaces_the_shape_with_the_result() {
        let mut session = AffineSession::new();

        let shape = session.apply(&TransformOp::Translate { dx: 10.0, dy: -5.0 }).unwrap();

        assert!(*shape == Shape(vec![
            Point2(360.0, 195.0),
            Point2(260.0, 145.0),
            Point2(310.0, 245.0),
            Point2(360.0, 215.0),
            Point2(410.0, 245.0),
            Point2(460.0, 145.0)
        ]));
    }

    #[test]
    fn successful_apply_redraws_the_frame() {
        let mut session = AffineSession::new();

        session.apply(&TransformOp::Translate { dx: 10.0, dy: -5.0 }).unwrap();

        let drawing = session.canvas().get_drawing();

        // Each frame begins with a clear, so only the latest frame is stored
        assert!(drawing[0] == Draw::ClearCanvas(BACKGROUND));
        assert!(drawing.iter().any(|draw| *draw == Draw::Move(360.0, 195.0)));
        assert!(!drawing.iter().any(|draw| *draw == Draw::Move(350.0, 200.0)));
    }

    #[test]
    fn apply_rejects_non_finite_parameters() {
        let mut session = AffineSession::new();

        let result = session.apply(&TransformOp::Rotate { angle: f64::NAN, cx: 0.0, cy: 0.0 });

        assert!(result == Err(SessionError::NonFiniteParameter));
        assert!(*session.shape() == original_shape());
    }

    #[test]
    fn failed_apply_leaves_the_canvas_alone() {
        let mut session = AffineSession::new();
        let before      = session.canvas().get_drawing();

        let result = session.apply(&TransformOp::Scale { kx: f64::INFINITY, ky: 1.0, cx: 0.0, cy: 0.0 });

        assert!(result.is_err());
        assert!(session.canvas().get_drawing() == before);
    }

    #[test]
    fn reset_restores_the_original_shape() {
        let mut session = AffineSession::new();

        session.apply(&TransformOp::Scale { kx: 2.0, ky: 2.0, cx: 0.0, cy: 0.0 }).unwrap();
        session.reset();

        assert!(*session.shape() == original_shape());
    }

    #[test]
    fn operations_compose_across_applies() {
        let mut session = AffineSession::new();

        session.apply(&TransformOp::Translate { dx: 5.0, dy: 0.0 }).unwrap();
        session.apply(&TransformOp::Translate { dx: 0.0, dy: 7.0 }).unwrap();

        let expected = translate(&original_shape(), 5.0, 7.0);

        assert!(*session.shape() == expected);
    }
}
