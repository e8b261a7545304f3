//! Planar convex hulls, two ways.
//!
//! - `hull::sweep_hull`: monotone chain, O(N log N), ordered counterclockwise.
//! - `hull::exhaustive_hull`: every pair as a candidate edge, O(N³), unordered set.
//!
//! Both share `geom2::orientation` and report corners only, so they agree on
//! the vertex set for every input except a lone point, which has no pair to
//! test and therefore no exhaustive hull.
//! `sample` and `timing` supply inputs and measurements for comparisons.
//!
//! API Policy
//! - `api` and `prelude` are the curated surfaces; module paths may move.

pub mod api;
pub mod geom2;
pub mod hull;
pub mod sample;
pub mod timing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{orientation, turn, Point2, Turn};
pub use hull::{exhaustive_hull, exhaustive_hull_ordered, normalize, sweep_hull, Algorithm};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{orientation, turn, Point2, Turn};
    pub use crate::hull::metrics::{area, perimeter, same_vertex_set};
    pub use crate::hull::{
        exhaustive_hull, exhaustive_hull_ordered, normalize, sweep_hull, Algorithm,
    };
    pub use crate::sample::{draw_points, ReplayToken, SampleCfg, SampleShape};
    pub use crate::timing::{time, Timed};
    pub use nalgebra::Vector2 as Vec2;
}
