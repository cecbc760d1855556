//! 2D geometric kernel: coordinate domains, the orientation predicate and
//! parallel strips.
//!
//! Purpose
//! - One exact predicate (`orientation`) that every hull and width routine
//!   goes through, evaluated in a widened type chosen by the coordinate type.
//! - A small `ParallelStrip` primitive shared by the antipodal finder and the
//!   thick-segment recognizer.
//!
//! Conventions
//! - Points are `Vec2<T>` (`nalgebra::Vector2`), polygons are ccw.
//! - No tolerances: integer domains are exact, real domains accept the usual
//!   floating-point sign noise on near-degenerate input.
//!
//! References
//! - Code cross-refs: `hull2::{andrew, graham, melkman, IncrementalHull, antipodal}`,
//!   `thick::AlphaThickSegment`

mod predicates;
mod strip;
mod types;

pub use predicates::{dot_wide, left_normal, lex_cmp, orientation, sq_dist_wide, turn, Turn};
pub(crate) use predicates::within_segment;
pub use strip::{ParallelStrip, ThicknessDefinition};
pub use types::{to_real, wide_to_real, widen, Coord, Vec2};
