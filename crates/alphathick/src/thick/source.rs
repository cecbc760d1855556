//! Point sources feeding the recognizer.
//!
//! A source is a forward cursor: `peek` shows the next point without
//! consuming it and `advance` consumes it. The recognizer only advances
//! after an extension was accepted, so a rejected point stays available.

use std::fmt;

use nalgebra::Vector2;

use crate::geom2::{Coord, Vec2};

/// Forward cursor over a sequence of points.
pub trait PointSource<T: Coord> {
    /// Next point, or None at the end.
    fn peek(&self) -> Option<Vec2<T>>;
    /// Consume the next point (no-op at the end).
    fn advance(&mut self);
    /// Number of points consumed so far.
    fn position(&self) -> usize;

    fn at_end(&self) -> bool {
        self.peek().is_none()
    }

    fn next_point(&mut self) -> Option<Vec2<T>> {
        let p = self.peek()?;
        self.advance();
        Some(p)
    }
}

/// Placeholder source of push-style recognizers; always empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoSource;

impl<T: Coord> PointSource<T> for NoSource {
    fn peek(&self) -> Option<Vec2<T>> {
        None
    }
    fn advance(&mut self) {}
    fn position(&self) -> usize {
        0
    }
}

/// Cursor over a preloaded slice.
///
/// `position()` is the absolute slice index, so a cursor created with
/// `starting_at(points, k)` reports `k` before anything was consumed.
#[derive(Clone, Copy, Debug)]
pub struct SliceCursor<'a, T: Coord> {
    points: &'a [Vec2<T>],
    pos: usize,
}

impl<'a, T: Coord> SliceCursor<'a, T> {
    pub fn new(points: &'a [Vec2<T>]) -> Self {
        Self { points, pos: 0 }
    }

    /// Cursor whose next point is `points[index]` (clamped to the end).
    pub fn starting_at(points: &'a [Vec2<T>], index: usize) -> Self {
        Self {
            points,
            pos: index.min(points.len()),
        }
    }

    /// Points not consumed yet.
    pub fn remaining(&self) -> &'a [Vec2<T>] {
        &self.points[self.pos..]
    }
}

impl<T: Coord> PointSource<T> for SliceCursor<'_, T> {
    #[inline]
    fn peek(&self) -> Option<Vec2<T>> {
        self.points.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self) {
        if self.pos < self.points.len() {
            self.pos += 1;
        }
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }
}

/// Error raised while building a point source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// A Freeman code outside `0..=3`.
    InvalidCode { index: usize, code: u8 },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode { index, code } => {
                write!(f, "invalid Freeman code {code} at position {index} (expected 0..=3)")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Streaming decoder of a 4-connected Freeman chain code.
///
/// Codes: `0 = +x`, `1 = +y`, `2 = −x`, `3 = −y`. Yields the start point and
/// then one point per code, `codes.len() + 1` points in total.
#[derive(Clone, Debug)]
pub struct FreemanCursor {
    codes: Vec<u8>,
    current: Vec2<i32>,
    pos: usize,
}

impl FreemanCursor {
    pub fn new(
        start: Vec2<i32>,
        codes: impl IntoIterator<Item = u8>,
    ) -> Result<Self, SourceError> {
        let codes: Vec<u8> = codes.into_iter().collect();
        if let Some((index, &code)) = codes.iter().enumerate().find(|&(_, &c)| c > 3) {
            return Err(SourceError::InvalidCode { index, code });
        }
        Ok(Self {
            codes,
            current: start,
            pos: 0,
        })
    }

    /// Total number of points the code describes, start point included.
    /// Never zero: an empty code still yields `start`.
    pub fn point_count(&self) -> usize {
        self.codes.len() + 1
    }

    #[inline]
    fn step(code: u8) -> Vec2<i32> {
        match code {
            0 => Vector2::new(1, 0),
            1 => Vector2::new(0, 1),
            2 => Vector2::new(-1, 0),
            _ => Vector2::new(0, -1),
        }
    }
}

impl PointSource<i32> for FreemanCursor {
    fn peek(&self) -> Option<Vec2<i32>> {
        (self.pos <= self.codes.len()).then_some(self.current)
    }

    fn advance(&mut self) {
        if self.pos < self.codes.len() {
            self.current += Self::step(self.codes[self.pos]);
        }
        if self.pos <= self.codes.len() {
            self.pos += 1;
        }
    }

    fn position(&self) -> usize {
        self.pos
    }
}
