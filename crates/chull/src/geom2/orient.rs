//! Orientation predicate shared by every hull builder.
//!
//! The determinant is evaluated in `i128`: differences of `i32` coordinates
//! stay below 2^32, products below 2^64, so the result is exact and the
//! comparison against zero is exact too. No epsilon anywhere.

use super::types::{Point2, Turn};

/// Twice the signed area of triangle `(p, q, r)`.
///
/// `> 0` if `r` is left of `p→q`, `< 0` if right, `0` if collinear.
#[inline]
pub fn orientation(p: Point2, q: Point2, r: Point2) -> i128 {
    let (px, py) = (i128::from(p.x), i128::from(p.y));
    let qx = i128::from(q.x) - px;
    let qy = i128::from(q.y) - py;
    let rx = i128::from(r.x) - px;
    let ry = i128::from(r.y) - py;
    qx * ry - qy * rx
}

/// Sign of `orientation(p, q, r)` as a `Turn`.
#[inline]
pub fn turn(p: Point2, q: Point2, r: Point2) -> Turn {
    match orientation(p, q, r).signum() {
        1 => Turn::Left,
        -1 => Turn::Right,
        _ => Turn::Collinear,
    }
}

/// Pre: `r` is collinear with `p` and `q`.
/// Post: true iff `r` lies on the closed segment `[p, q]`.
#[inline]
pub fn on_segment(p: Point2, q: Point2, r: Point2) -> bool {
    p.x.min(q.x) <= r.x && r.x <= p.x.max(q.x) && p.y.min(q.y) <= r.y && r.y <= p.y.max(q.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const O: Point2 = Point2::new(0, 0);

    #[test]
    fn sign_convention() {
        let q = Point2::new(1, 0);
        assert_eq!(orientation(O, q, Point2::new(0, 1)), 1);
        assert_eq!(turn(O, q, Point2::new(0, 1)), Turn::Left);
        assert_eq!(turn(O, q, Point2::new(0, -1)), Turn::Right);
        assert_eq!(turn(O, q, Point2::new(7, 0)), Turn::Collinear);
        assert_eq!(turn(O, q, Point2::new(-3, 0)), Turn::Collinear);
    }

    #[test]
    fn antisymmetric_in_last_two() {
        let p = Point2::new(3, -2);
        let q = Point2::new(-5, 11);
        let r = Point2::new(8, 4);
        assert_eq!(orientation(p, q, r), -orientation(p, r, q));
        assert_eq!(orientation(p, q, r), orientation(q, r, p));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let p = Point2::new(i32::MIN, i32::MIN);
        let q = Point2::new(i32::MAX, i32::MIN);
        let r = Point2::new(i32::MIN, i32::MAX);
        let span = i128::from(i32::MAX) - i128::from(i32::MIN);
        assert_eq!(orientation(p, q, r), span * span);
        assert_eq!(turn(p, r, q), Turn::Right);
        // Off-by-one from collinear at the lattice extremes.
        let near = Point2::new(i32::MAX, i32::MAX - 1);
        assert_eq!(turn(p, Point2::new(i32::MAX, i32::MAX), near), Turn::Right);
    }

    #[test]
    fn segment_membership_is_closed() {
        let a = Point2::new(0, 0);
        let b = Point2::new(4, 2);
        assert!(on_segment(a, b, a));
        assert!(on_segment(a, b, b));
        assert!(on_segment(a, b, Point2::new(2, 1)));
        assert!(!on_segment(a, b, Point2::new(6, 3)));
        assert!(!on_segment(a, b, Point2::new(-2, -1)));
    }
}
