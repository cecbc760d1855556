//! Greedy decomposition of a curve into maximal alpha-thick segments.
//!
//! Each segment starts on the last point of the previous one, so consecutive
//! segments share exactly one point and together cover the whole curve.

use tracing::debug;

use super::segment::{AlphaThickSegment, SegmentCfg};
use super::source::SliceCursor;
use crate::geom2::{Coord, ParallelStrip, Vec2};

/// One recognized segment of a curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentSummary<T: Coord> {
    /// Index of the first point in the input.
    pub start: usize,
    /// One past the index of the last point.
    pub end: usize,
    pub first: Vec2<T>,
    pub last: Vec2<T>,
    pub strip: ParallelStrip<T>,
    pub thickness: f64,
}

impl<T: Coord> SegmentSummary<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Cover `points` with maximal alpha-thick segments, left to right.
///
/// Panics if `cfg.alpha` is negative or NaN: two points always form a strip
/// of width zero, and a non-negative threshold is what guarantees progress.
pub fn greedy_segments<T: Coord>(points: &[Vec2<T>], cfg: SegmentCfg) -> Vec<SegmentSummary<T>> {
    assert!(
        cfg.alpha >= 0.0,
        "greedy segmentation needs alpha >= 0, got {}",
        cfg.alpha
    );
    let mut out = Vec::new();
    let mut start = 0usize;
    while start < points.len() {
        let mut seg = AlphaThickSegment::attached(SliceCursor::starting_at(points, start), cfg);
        while seg.extend_front() {}
        let end = seg.end().unwrap_or(points.len());
        let (first, last) = seg.extremity_points();
        let summary = SegmentSummary {
            start,
            end,
            first,
            last,
            strip: seg.primitive(),
            thickness: seg.thickness(),
        };
        debug!(
            start,
            end,
            thickness = summary.thickness,
            hull = seg.convex_hull().len(),
            "segment recognized"
        );
        out.push(summary);
        if end >= points.len() {
            break;
        }
        start = end - 1;
    }
    out
}
