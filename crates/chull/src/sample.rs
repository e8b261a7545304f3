//! Random lattice point sets (square or disk) with replay tokens.
//!
//! Purpose
//! - Produce the input point sets for hull comparisons and timing sweeps:
//!   uniform integer points in a square (the default `[0, 100]²`), or points
//!   uniform in a disk, rounded to the lattice.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so any set in a stream can be regenerated on its own.
//!
//! Code cross-refs: `crate::timing::perf_sweep`, `Point2::from_vec2_rounded`

use crate::geom2::Point2;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Error type for sampler parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Region the points are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleShape {
    /// Uniform integer coordinates in `[lo, hi]²` (inclusive).
    Square { lo: i32, hi: i32 },
    /// Uniform in the disk, then rounded to the nearest lattice point.
    Disk { center: Point2, radius: f64 },
}

impl SampleShape {
    fn validate(&self) -> Result<(), SampleError> {
        match *self {
            SampleShape::Square { lo, hi } => {
                if lo > hi {
                    return Err(SampleError::invalid(format!(
                        "square range is empty: lo={lo} > hi={hi}"
                    )));
                }
            }
            SampleShape::Disk { center, radius } => {
                if !radius.is_finite() || radius < 0.0 {
                    return Err(SampleError::invalid(format!(
                        "disk radius must be finite and >= 0, got {radius}"
                    )));
                }
                let c = center.to_vec2();
                let reach = [c.x - radius, c.x + radius, c.y - radius, c.y + radius];
                if reach
                    .iter()
                    .any(|&v| v.round() < f64::from(i32::MIN) || v.round() > f64::from(i32::MAX))
                {
                    return Err(SampleError::invalid("disk leaves the i32 lattice"));
                }
            }
        }
        Ok(())
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    pub count: usize,
    pub shape: SampleShape,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: SampleShape::Square { lo: 0, hi: 100 },
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Next token in the same stream.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points from `cfg.shape`. Same cfg and token give the same points.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Result<Vec<Point2>, SampleError> {
    cfg.shape.validate()?;
    let mut rng = tok.to_std_rng();
    let mut out = Vec::with_capacity(cfg.count);
    match cfg.shape {
        SampleShape::Square { lo, hi } => {
            for _ in 0..cfg.count {
                out.push(Point2::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi)));
            }
        }
        SampleShape::Disk { center, radius } => {
            let c = center.to_vec2();
            for _ in 0..cfg.count {
                let p = c + polar(&mut rng, radius);
                // validate() keeps the rounded disk inside the lattice.
                let q = Point2::from_vec2_rounded(p)
                    .ok_or_else(|| SampleError::invalid("disk sample left the i32 lattice"))?;
                out.push(q);
            }
        }
    }
    Ok(out)
}

/// Uniform offset in the disk of radius `r` (sqrt-radius for uniform area density).
fn polar<R: Rng>(rng: &mut R, r: f64) -> Vector2<f64> {
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let rho = r * rng.gen::<f64>().sqrt();
    Vector2::new(theta.cos() * rho, theta.sin() * rho)
}
