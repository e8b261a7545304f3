//! Convex hull builders.
//!
//! Purpose
//! - Two builders with the same answer and different cost: `sweep_hull`
//!   (monotone chain, O(N log N), ordered output) and `exhaustive_hull`
//!   (pair test, O(N³), unordered set).
//! - `normalize` turns the exhaustive set into the same ordered polygon by
//!   running it through `sweep_hull`.
//!
//! Collinearity
//! - Both builders keep corners only. A point lying on a hull edge between
//!   two other hull points is never reported.
//!
//! Code cross-refs: `crate::geom2::orient`, `metrics`

mod exhaustive;
pub mod metrics;
mod normalize;
mod sweep;

pub use exhaustive::exhaustive_hull;
pub use normalize::{exhaustive_hull_ordered, normalize};
pub use sweep::sweep_hull;

use crate::geom2::Point2;
use std::fmt;
use std::str::FromStr;

/// Hull builder selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sweep,
    Exhaustive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Sweep, Algorithm::Exhaustive];

    /// Counterclockwise hull polygon; the exhaustive path is normalized.
    pub fn ordered_hull(self, points: &[Point2]) -> Vec<Point2> {
        match self {
            Algorithm::Sweep => sweep_hull(points),
            Algorithm::Exhaustive => exhaustive_hull_ordered(points),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sweep => "sweep",
            Algorithm::Exhaustive => "exhaustive",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown hull algorithm `{}` (expected `sweep` or `exhaustive`)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sweep" | "monotone-chain" => Ok(Algorithm::Sweep),
            "exhaustive" | "brute-force" => Ok(Algorithm::Exhaustive),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
