//! Wall-clock timing around hull builds and the sweep-vs-exhaustive size sweep.

use std::time::{Duration, Instant};

use crate::geom2::Point2;
use crate::hull::{exhaustive_hull, metrics::same_vertex_set, normalize, sweep_hull};
use crate::sample::{draw_points, ReplayToken, SampleCfg, SampleError, SampleShape};

/// Sizes used by the default performance sweep.
pub const DEFAULT_SIZES: [usize; 6] = [0, 100, 200, 300, 400, 500];

/// Shape used by the default performance sweep.
pub const DEFAULT_PERF_SHAPE: SampleShape = SampleShape::Square { lo: 0, hi: 1000 };

/// A value plus the time it took to compute.
#[derive(Clone, Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }
}

/// Run `f` once and record its wall-clock duration.
pub fn time<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// One size of the performance sweep.
#[derive(Clone, Debug)]
pub struct PerfRow {
    pub n: usize,
    /// Token that redraws this row's point set with `draw_points`.
    pub replay: ReplayToken,
    pub sweep: Duration,
    pub exhaustive: Duration,
    /// Sweep hull and normalized exhaustive hull have the same vertex set.
    /// Only a single-point input disagrees (no pair, so no exhaustive hull).
    pub agree: bool,
}

impl PerfRow {
    fn measure(points: &[Point2], replay: ReplayToken) -> Self {
        let exhaustive = time(|| exhaustive_hull(points));
        let sweep = time(|| sweep_hull(points));
        let agree = same_vertex_set(&sweep.value, &normalize(&exhaustive.value));
        Self {
            n: points.len(),
            replay,
            sweep: sweep.elapsed,
            exhaustive: exhaustive.elapsed,
            agree,
        }
    }
}

/// Time both builders on one fresh point set per size.
///
/// Set `k` is drawn with `ReplayToken { seed, index: k }`, so any row can be
/// reproduced with `draw_points`. Normalization runs outside the timed region.
pub fn perf_sweep(
    sizes: &[usize],
    shape: SampleShape,
    seed: u64,
) -> Result<Vec<PerfRow>, SampleError> {
    let mut rows = Vec::with_capacity(sizes.len());
    let mut tok = ReplayToken::new(seed);
    for &n in sizes {
        let points = draw_points(SampleCfg { count: n, shape }, tok)?;
        rows.push(PerfRow::measure(&points, tok));
        tok = tok.next();
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_keeps_value() {
        let t = time(|| 6 * 7);
        assert_eq!(t.value, 42);
        assert!(t.elapsed_ms() >= 0.0);
    }

    #[test]
    fn sweep_rows_follow_sizes_and_agree() {
        let sizes = [0usize, 5, 40];
        let rows = perf_sweep(&sizes, DEFAULT_PERF_SHAPE, 11).unwrap();
        assert_eq!(rows.iter().map(|r| r.n).collect::<Vec<_>>(), sizes);
        assert!(rows.iter().all(|r| r.agree));
    }

    #[test]
    fn rows_replay_their_point_sets() {
        let sizes = [3usize, 7, 12];
        let rows = perf_sweep(&sizes, DEFAULT_PERF_SHAPE, 99).unwrap();
        for (k, row) in rows.iter().enumerate() {
            assert_eq!(row.replay, ReplayToken { seed: 99, index: k as u64 });
            let cfg = SampleCfg {
                count: row.n,
                shape: DEFAULT_PERF_SHAPE,
            };
            assert_eq!(draw_points(cfg, row.replay).unwrap().len(), row.n);
        }
    }

    #[test]
    fn single_point_row_disagrees_duplicates_agree() {
        let p = Point2::new(4, 4);
        assert!(!PerfRow::measure(&[p], ReplayToken::new(0)).agree);
        assert!(PerfRow::measure(&[p, p, p], ReplayToken::new(0)).agree);
    }

    #[test]
    fn sweep_propagates_sampler_errors() {
        let bad = SampleShape::Square { lo: 1, hi: 0 };
        assert!(perf_sweep(&[3], bad, 0).is_err());
        // No sizes: nothing is drawn, so nothing fails.
        assert!(perf_sweep(&[], bad, 0).unwrap().is_empty());
    }
}
