//! Measurements on ordered hull polygons (implicitly closed: last connects to first).

use std::collections::BTreeSet;

use crate::geom2::{turn, Point2, Turn};

/// Shoelace sum over the closed polygon (twice the signed area, exact).
///
/// Positive for counterclockwise order; `0` for fewer than three vertices.
pub fn twice_signed_area(poly: &[Point2]) -> i128 {
    if poly.len() < 3 {
        return 0;
    }
    closed_edges(poly)
        .map(|(a, b)| i128::from(a.x) * i128::from(b.y) - i128::from(b.x) * i128::from(a.y))
        .sum()
}

pub fn area(poly: &[Point2]) -> f64 {
    twice_signed_area(poly).unsigned_abs() as f64 / 2.0
}

/// Length of the closed boundary. A two-point hull counts its segment twice.
pub fn perimeter(poly: &[Point2]) -> f64 {
    if poly.len() < 2 {
        return 0.0;
    }
    closed_edges(poly)
        .map(|(a, b)| (b.to_vec2() - a.to_vec2()).norm())
        .sum()
}

/// True iff every consecutive vertex triple (cyclically) turns strictly left.
///
/// Polygons with fewer than three vertices are not strictly convex.
pub fn is_strictly_convex_ccw(poly: &[Point2]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|k| turn(poly[k], poly[(k + 1) % n], poly[(k + 2) % n]) == Turn::Left)
}

/// Compare hull outputs as vertex sets, ignoring traversal order and repeats.
pub fn same_vertex_set(a: &[Point2], b: &[Point2]) -> bool {
    let sa: BTreeSet<_> = a.iter().collect();
    let sb: BTreeSet<_> = b.iter().collect();
    sa == sb
}

fn closed_edges(poly: &[Point2]) -> impl Iterator<Item = (Point2, Point2)> + '_ {
    poly.iter()
        .copied()
        .zip(poly.iter().copied().cycle().skip(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        [(0, 0), (2, 0), (2, 2), (0, 2)]
            .into_iter()
            .map(Point2::from)
            .collect()
    }

    #[test]
    fn square_measurements() {
        let sq = square();
        assert_eq!(twice_signed_area(&sq), 8);
        assert!((area(&sq) - 4.0).abs() < 1e-12);
        assert!((perimeter(&sq) - 8.0).abs() < 1e-12);
        assert!(is_strictly_convex_ccw(&sq));

        let mut cw = sq.clone();
        cw.reverse();
        assert_eq!(twice_signed_area(&cw), -8);
        assert!((area(&cw) - 4.0).abs() < 1e-12);
        assert!(!is_strictly_convex_ccw(&cw));
    }

    #[test]
    fn degenerate_polygons() {
        let seg = [Point2::new(0, 0), Point2::new(3, 4)];
        assert_eq!(twice_signed_area(&seg), 0);
        assert!((perimeter(&seg) - 10.0).abs() < 1e-12);
        assert!(!is_strictly_convex_ccw(&seg));
        assert_eq!(perimeter(&seg[..1]), 0.0);
        assert_eq!(area(&[]), 0.0);
    }

    #[test]
    fn vertex_set_ignores_rotation_and_reflection() {
        let sq = square();
        let mut rotated = sq.clone();
        rotated.rotate_left(2);
        let mut reflected = sq.clone();
        reflected.reverse();
        assert!(same_vertex_set(&sq, &rotated));
        assert!(same_vertex_set(&sq, &reflected));
        assert!(!same_vertex_set(&sq, &sq[..3]));
    }
}
