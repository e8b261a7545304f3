//! Curated entry points for orchestration code (CLI, benches, examples).
//!
//! The two hull builders are the primary surface; everything else here is
//! plumbing for feeding and measuring them.

// Hull builders
pub use crate::hull::{
    exhaustive_hull, exhaustive_hull_ordered, normalize, sweep_hull, Algorithm,
    ParseAlgorithmError,
};
// Geometry
pub use crate::geom2::{on_segment, orientation, turn, Point2, Turn};
// Measurements
pub use crate::hull::metrics::{
    area, is_strictly_convex_ccw, perimeter, same_vertex_set, twice_signed_area,
};
// Inputs and timing
pub use crate::sample::{draw_points, ReplayToken, SampleCfg, SampleError, SampleShape};
pub use crate::timing::{perf_sweep, time, PerfRow, Timed, DEFAULT_PERF_SHAPE, DEFAULT_SIZES};

/// Ordered hull with the time the chosen builder took (normalization included).
pub fn timed_hull(algo: Algorithm, points: &[Point2]) -> Timed<Vec<Point2>> {
    time(|| algo.ordered_hull(points))
}
