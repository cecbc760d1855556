//! Convex hulls of planar point sets and their minimal-width strips.
//!
//! Purpose
//! - Batch hulls (`andrew`, `graham`, `melkman`) for whole point sets.
//! - An online hull (`IncrementalHull`) that grows one point at a time along
//!   a simple chain, cheap to clone for trial insertions.
//! - `antipodal`: rotating calipers over a ccw hull, yielding the
//!   minimal-width `ParallelStrip` and its leaning points.
//!
//! Conventions
//! - Hulls are `Vec<Vec2<T>>` in ccw order with strictly convex vertices;
//!   one or two entries for degenerate (single point / collinear) sets.
//!
//! References
//! - Code cross-refs: `geom2::{orientation, ParallelStrip}`, `thick::AlphaThickSegment`

mod algorithms;
mod calipers;
mod melkman;

pub use algorithms::{andrew, circularly_equal, graham, melkman};
pub use calipers::{antipodal, AntipodalFit, AntipodalPair};
pub use melkman::IncrementalHull;

#[cfg(test)]
mod tests;
