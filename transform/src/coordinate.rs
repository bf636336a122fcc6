use std::ops::*;

///
/// Represents a 2D point or offset, with the Y axis pointing down as it does on screen
///
/// Serializes as a two-element array, so a point crosses the wire as `[x, y]`.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Point2(pub f64, pub f64);

impl Point2 {
    ///
    /// X component of this point
    ///
    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    ///
    /// Y component of this point
    ///
    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// True if both components are finite numbers
    ///
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    ///
    /// Computes the distance between this point and another one
    ///
    #[inline]
    pub fn distance_to(&self, target: &Point2) -> f64 {
        let dist_x = target.0 - self.0;
        let dist_y = target.1 - self.1;

        f64::sqrt(dist_x*dist_x + dist_y*dist_y)
    }
}

impl Add<Point2> for Point2 {
    type Output = Point2;

    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        Point2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Point2> for Point2 {
    type Output = Point2;

    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;

    #[inline]
    fn mul(self, rhs: f64) -> Point2 {
        Point2(self.0 * rhs, self.1 * rhs)
    }
}
