use super::coordinate::*;

///
/// The ordered vertex sequence of a closed polygon
///
/// Vertices connect in sequence order, with the last vertex joining back to the
/// first when the polygon is rendered. The vertex order defines the edges, so
/// nothing here ever reorders or deduplicates the points. Serializes as a plain
/// array of points.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Shape(pub Vec<Point2>);

impl Shape {
    ///
    /// The number of vertices in this shape
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    ///
    /// True if this shape has no vertices
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    ///
    /// Iterates over the vertices in sequence order
    ///
    #[inline]
    pub fn points(&self) -> impl Iterator<Item=&Point2> {
        self.0.iter()
    }
}

impl From<Vec<Point2>> for Shape {
    fn from(points: Vec<Point2>) -> Shape {
        Shape(points)
    }
}

///
/// The figure everything starts from: a six-point polygon with a notch in its
/// lower edge, sized for the default 700x500 view
///
/// Every call builds a fresh copy, so resetting to the original can never alias
/// a shape that is still being edited.
///
pub fn original_shape() -> Shape {
    Shape(vec![
        Point2(350.0, 200.0),
        Point2(250.0, 150.0),
        Point2(300.0, 250.0),
        Point2(350.0, 220.0),
        Point2(400.0, 250.0),
        Point2(450.0, 150.0)
    ])
}
