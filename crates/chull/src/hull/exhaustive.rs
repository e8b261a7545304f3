//! Exhaustive hull in O(N³): every ordered pair is a candidate edge.

use std::collections::BTreeSet;

use crate::geom2::{on_segment, turn, Point2, Turn};

/// Hull vertices found by testing every ordered pair `(i, j)`, `i != j`, as a directed edge.
///
/// A pair qualifies when no two points lie strictly on opposite sides of its
/// line and every point on the line lies within the closed segment. Only hull
/// corners can pass, which matches `sweep_hull`'s collinear pruning. A pair of
/// equal points passes only when every point equals it, so an all-duplicate
/// input yields that single point. The set carries no traversal order; see
/// `normalize` for that. Inputs with fewer than two points give an empty set.
pub fn exhaustive_hull(points: &[Point2]) -> BTreeSet<Point2> {
    let mut hull = BTreeSet::new();
    for (i, &p) in points.iter().enumerate() {
        for (j, &q) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if is_hull_edge(points, p, q) {
                hull.insert(p);
                hull.insert(q);
            }
        }
    }
    hull
}

fn is_hull_edge(points: &[Point2], p: Point2, q: Point2) -> bool {
    let mut left = false;
    let mut right = false;
    for &r in points {
        match turn(p, q, r) {
            Turn::Left => left = true,
            Turn::Right => right = true,
            Turn::Collinear => {
                if !on_segment(p, q, r) {
                    return false;
                }
            }
        }
        if left && right {
            return false;
        }
    }
    true
}
