//! Ordering pass for unordered hull vertex sets.

use std::collections::BTreeSet;

use super::exhaustive::exhaustive_hull;
use super::sweep::sweep_hull;
use crate::geom2::Point2;

/// Counterclockwise polygon through an unordered vertex set.
///
/// Reuses `sweep_hull`, which both orders the set and prunes any collinear
/// edge-interior points it may contain.
pub fn normalize(vertices: &BTreeSet<Point2>) -> Vec<Point2> {
    let pts: Vec<Point2> = vertices.iter().copied().collect();
    sweep_hull(&pts)
}

/// `exhaustive_hull` followed by `normalize`.
pub fn exhaustive_hull_ordered(points: &[Point2]) -> Vec<Point2> {
    normalize(&exhaustive_hull(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_and_prunes_superset() {
        // Unordered superset including an edge midpoint.
        let raw: BTreeSet<Point2> = [(2, 2), (0, 0), (1, 0), (2, 0), (0, 2)]
            .into_iter()
            .map(Point2::from)
            .collect();
        let expected: Vec<Point2> = [(0, 0), (2, 0), (2, 2), (0, 2)]
            .into_iter()
            .map(Point2::from)
            .collect();
        assert_eq!(normalize(&raw), expected);
    }

    #[test]
    fn empty_set_stays_empty() {
        assert!(normalize(&BTreeSet::new()).is_empty());
        assert!(exhaustive_hull_ordered(&[Point2::new(9, 9)]).is_empty());
    }
}
