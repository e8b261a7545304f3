//! Andrew's monotone chain in O(N log N).

use crate::geom2::{orientation, Point2};

/// Convex hull by monotone chain, counterclockwise from the lexicographically smallest point.
///
/// Collinear points are popped (`orientation <= 0`), so only corners survive.
/// Inputs with at most one point are returned sorted as-is; duplicates are not
/// removed up front, so an all-identical input yields `[p, p]`.
pub fn sweep_hull(points: &[Point2]) -> Vec<Point2> {
    let mut pts = points.to_vec();
    pts.sort_unstable();
    if pts.len() <= 1 {
        return pts;
    }
    let mut lower = half_chain(pts.iter().copied(), pts.len());
    let mut upper = half_chain(pts.iter().rev().copied(), pts.len());
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn half_chain(sorted: impl Iterator<Item = Point2>, cap: usize) -> Vec<Point2> {
    let mut chain: Vec<Point2> = Vec::with_capacity(cap);
    for p in sorted {
        while chain.len() >= 2 && orientation(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point2> {
        raw.iter().copied().map(Point2::from).collect()
    }

    #[test]
    fn empty_and_single() {
        assert!(sweep_hull(&[]).is_empty());
        let p = Point2::new(4, -7);
        assert_eq!(sweep_hull(&[p]), vec![p]);
    }

    #[test]
    fn square_with_interior_point() {
        let hull = sweep_hull(&pts(&[(0, 0), (0, 2), (2, 2), (2, 0), (1, 1)]));
        assert_eq!(hull, pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]));
    }

    #[test]
    fn collinear_midpoint_dropped() {
        assert_eq!(sweep_hull(&pts(&[(0, 0), (1, 0), (2, 0)])), pts(&[(0, 0), (2, 0)]));
        assert_eq!(sweep_hull(&pts(&[(2, 0), (0, 0), (1, 0)])), pts(&[(0, 0), (2, 0)]));
    }

    #[test]
    fn collinear_on_hull_edge_dropped() {
        let hull = sweep_hull(&pts(&[(0, 0), (2, 0), (4, 0), (4, 4), (0, 4), (0, 2)]));
        assert_eq!(hull, pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]));
    }

    #[test]
    fn duplicates_collapse() {
        let hull = sweep_hull(&pts(&[(0, 0), (0, 0), (3, 0), (3, 0), (0, 3), (0, 3)]));
        assert_eq!(hull, pts(&[(0, 0), (3, 0), (0, 3)]));
        let p = Point2::new(5, 5);
        assert_eq!(sweep_hull(&[p, p, p]), vec![p, p]);
    }
}
