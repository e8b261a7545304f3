//! Planar lattice geometry.
//!
//! Purpose
//! - One point type (`Point2`, exact `i32` coordinates) and one orientation
//!   predicate shared by every hull builder, so all of them apply the same
//!   collinearity rule.
//!
//! Code cross-refs: `orient::{orientation, turn, on_segment}`, `crate::hull`

pub mod orient;
mod types;

pub use orient::{on_segment, orientation, turn};
pub use types::{Point2, Turn};
