//! Alpha-thick segments: online recognition along a curve.
//!
//! Purpose
//! - `AlphaThickSegment` grows a window of consecutive points while its hull
//!   fits in a strip of width ≤ alpha, rejecting the first point that would
//!   break the bound and leaving its state untouched.
//! - `PointSource` abstracts where points come from (a slice, a Freeman
//!   chain code, or nothing for push-style use).
//! - `greedy_segments` covers a whole curve with maximal segments.
//!
//! References
//! - Code cross-refs: `hull2::{IncrementalHull, antipodal}`, `geom2::ParallelStrip`

mod greedy;
mod segment;
mod source;

pub use greedy::{greedy_segments, SegmentSummary};
pub use segment::{AlphaThickSegment, SegmentCfg};
pub use source::{FreemanCursor, NoSource, PointSource, SliceCursor, SourceError};
