//! Convex hulls and alpha-thick segment recognition for planar point sequences.
//!
//! Modules
//! - `geom2`: coordinate domains, the exact orientation predicate, parallel strips.
//! - `hull2`: batch hulls (Andrew, Graham, Melkman), the online hull and
//!   rotating calipers.
//! - `thick`: the alpha-thick segment recognizer, point sources and greedy
//!   segmentation.
//! - `rand2`: reproducible random point sets for tests, benches and demos.
//!
//! API Policy
//! - `api` and `prelude` are convenience surfaces; module paths are the
//!   canonical ones.

pub mod api;
pub mod geom2;
pub mod hull2;
pub mod rand2;
pub mod thick;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Coord, Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{orientation, Coord, ParallelStrip, ThicknessDefinition, Vec2};
    pub use crate::hull2::{andrew, antipodal, graham, melkman, IncrementalHull};
    pub use crate::thick::{
        greedy_segments, AlphaThickSegment, PointSource, SegmentCfg, SliceCursor,
    };
}
