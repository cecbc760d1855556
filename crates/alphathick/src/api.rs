//! Curated re-exports grouped by task (UNSTABLE).
//!
//! Important
//! - Convenience surface for binaries and experiments. Breaking changes are
//!   allowed; prefer the module paths in library code.

// Kernel
pub use crate::geom2::{
    lex_cmp, orientation, turn, Coord, ParallelStrip, ThicknessDefinition, Turn, Vec2,
};
// Hulls and widths
pub use crate::hull2::{
    andrew, antipodal, circularly_equal, graham, melkman, AntipodalFit, AntipodalPair,
    IncrementalHull,
};
// Recognition
pub use crate::thick::{
    greedy_segments, AlphaThickSegment, FreemanCursor, NoSource, PointSource, SegmentCfg,
    SegmentSummary, SliceCursor, SourceError,
};
// Random inputs
pub use crate::rand2::{
    draw_box_points, draw_noisy_strip, draw_star_chain, BoxCfg, PointCount, ReplayToken,
    SamplerError, StarCfg, StripCfg,
};
