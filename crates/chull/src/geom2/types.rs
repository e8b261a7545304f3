//! Lattice points and turn classification.
//!
//! - `Point2`: integer point with lexicographic order (x, then y).
//! - `Turn`: sign of the orientation determinant.
//!
//! Coordinates are `i32` so the orientation determinant is exact in `i128`
//! (see `orient::orientation`). Float data enters through `from_vec2_rounded`.

use nalgebra::Vector2;
use std::fmt;

/// Point on the integer lattice.
///
/// Field order matters: the derived `Ord` compares `x` first, then `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Round a float vector to the nearest lattice point.
    ///
    /// Returns `None` for non-finite components or components outside the `i32` range.
    pub fn from_vec2_rounded(v: Vector2<f64>) -> Option<Self> {
        Some(Self {
            x: round_to_i32(v.x)?,
            y: round_to_i32(v.y)?,
        })
    }
}

#[inline]
fn round_to_i32(c: f64) -> Option<i32> {
    if !c.is_finite() {
        return None;
    }
    let r = c.round();
    if r < f64::from(i32::MIN) || r > f64::from(i32::MAX) {
        return None;
    }
    Some(r as i32)
}

impl From<(i32, i32)> for Point2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for (i32, i32) {
    #[inline]
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Turn direction of an ordered triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// `r` strictly left of `p→q` (counterclockwise).
    Left,
    /// `r` strictly right of `p→q` (clockwise).
    Right,
    Collinear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn order_is_lexicographic() {
        let mut pts = vec![
            Point2::new(1, 0),
            Point2::new(0, 5),
            Point2::new(0, -1),
            Point2::new(1, -3),
        ];
        pts.sort();
        assert_eq!(
            pts,
            vec![
                Point2::new(0, -1),
                Point2::new(0, 5),
                Point2::new(1, -3),
                Point2::new(1, 0),
            ]
        );
    }

    #[test]
    fn rounding_rejects_non_finite_and_out_of_range() {
        assert_eq!(
            Point2::from_vec2_rounded(vector![1.4, -2.6]),
            Some(Point2::new(1, -3))
        );
        assert_eq!(Point2::from_vec2_rounded(vector![f64::NAN, 0.0]), None);
        assert_eq!(Point2::from_vec2_rounded(vector![0.0, f64::INFINITY]), None);
        assert_eq!(Point2::from_vec2_rounded(vector![1e12, 0.0]), None);
        let p = Point2::new(i32::MIN, i32::MAX);
        assert_eq!(Point2::from_vec2_rounded(p.to_vec2()), Some(p));
    }
}
