//! Online recognizer of alpha-thick segments.
//!
//! Purpose
//! - Grow a window of consecutive curve points while the convex hull of the
//!   window fits in a parallel strip of width at most `alpha`.
//!
//! Why this design
//! - Each extension is an atomic attempt: the hull is cloned, the point is
//!   inserted into the clone and the minimal strip is recomputed. Only an
//!   accepted trial replaces the current state; a rejected one is dropped and
//!   the recognizer stays exactly as it was.
//! - Construction uses named entry points (`init_single`, `init_thresholded`,
//!   `init_fixed_count`, `init_from_points`), so a threshold and a point count
//!   can never be confused.
//! - Queries on an uninitialized recognizer panic: there is no meaningful
//!   strip to return.
//!
//! References
//! - Code cross-refs: `hull2::{IncrementalHull, antipodal}`, `thick::source`

use tracing::trace;

use super::source::{NoSource, PointSource};
use crate::geom2::{to_real, wide_to_real, Coord, ParallelStrip, ThicknessDefinition, Vec2};
use crate::hull2::{antipodal, AntipodalFit, AntipodalPair, IncrementalHull};

/// Recognition parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentCfg {
    /// Maximal accepted width; `+∞` accepts everything.
    pub alpha: f64,
    pub thickness: ThicknessDefinition,
}

impl Default for SegmentCfg {
    fn default() -> Self {
        Self {
            alpha: f64::INFINITY,
            thickness: ThicknessDefinition::Euclidean,
        }
    }
}

impl SegmentCfg {
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug)]
struct State<T: Coord> {
    window: Vec<Vec2<T>>,
    hull: IncrementalHull<T>,
    fit: AntipodalFit<T>,
}

/// Stateful alpha-thick segment recognizer.
///
/// `S` is the attached point source; push-style recognizers use `NoSource`.
#[derive(Clone, Debug)]
pub struct AlphaThickSegment<T: Coord, S = NoSource> {
    cfg: SegmentCfg,
    source: Option<S>,
    state: Option<State<T>>,
}

impl<T: Coord> Default for AlphaThickSegment<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coord> AlphaThickSegment<T> {
    /// Uninitialized push-style recognizer accepting any width.
    pub fn new() -> Self {
        Self::with_cfg(SegmentCfg::default())
    }

    pub fn with_threshold(alpha: f64) -> Self {
        Self::with_cfg(SegmentCfg::with_alpha(alpha))
    }
}

impl<T: Coord, S: PointSource<T>> AlphaThickSegment<T, S> {
    /// Uninitialized recognizer with the given parameters.
    pub fn with_cfg(cfg: SegmentCfg) -> Self {
        Self {
            cfg,
            source: None,
            state: None,
        }
    }

    /// Recognizer pulling points from `source`, initialized with its first point.
    ///
    /// Stays uninitialized when the source is empty.
    pub fn attached(source: S, cfg: SegmentCfg) -> Self {
        let mut seg = Self::with_cfg(cfg);
        seg.attach(source);
        seg
    }

    /// `attached` with the default thickness definition.
    pub fn thresholded(source: S, alpha: f64) -> Self {
        Self::attached(source, SegmentCfg::with_alpha(alpha))
    }

    /// Recognizer over the first `count` points of `source`, without rejection.
    pub fn fixed_count(source: S, count: usize) -> Self {
        let mut seg = Self::with_cfg(SegmentCfg::default());
        seg.init_fixed_count(source, count);
        seg
    }

    /// Reset to the single point `p`; detaches any source.
    pub fn init_single(&mut self, p: Vec2<T>) {
        self.source = None;
        self.state = Some(Self::single_state(p));
    }

    /// Reset onto `source` with threshold `alpha`, reading its first point.
    ///
    /// Returns false (recognizer uninitialized) for an empty source.
    pub fn init_thresholded(&mut self, source: S, alpha: f64) -> bool {
        self.cfg.alpha = alpha;
        self.attach(source)
    }

    /// Reset onto the next `count` points of `source` with `alpha = +∞`.
    ///
    /// Returns the number of points consumed (less than `count` if the
    /// source ran out). Hull and strip are computed as usual.
    pub fn init_fixed_count(&mut self, mut source: S, count: usize) -> usize {
        self.cfg.alpha = f64::INFINITY;
        let mut window = Vec::with_capacity(count);
        let mut hull = IncrementalHull::new();
        while window.len() < count {
            let Some(p) = source.next_point() else {
                break;
            };
            window.push(p);
            hull.add(p);
        }
        let consumed = window.len();
        self.state = self.fit_state(window, hull);
        self.source = Some(source);
        consumed
    }

    /// Reset onto an explicit chain of at least three points, without rejection.
    pub fn init_from_points(&mut self, points: &[Vec2<T>]) {
        assert!(
            points.len() >= 3,
            "init_from_points needs at least 3 points, got {}",
            points.len()
        );
        self.source = None;
        let hull = IncrementalHull::from_chain(points);
        self.state = self.fit_state(points.to_vec(), hull);
    }

    /// Try to extend with the next source point.
    ///
    /// Returns false at the end of the source or when the point is rejected;
    /// the source only advances on acceptance.
    pub fn extend_front(&mut self) -> bool {
        let Some(p) = self.attached_source().peek() else {
            return false;
        };
        if !self.extend_front_with(p) {
            return false;
        }
        if let Some(src) = self.source.as_mut() {
            src.advance();
        }
        true
    }

    /// Try to extend the window with `p`.
    ///
    /// On an uninitialized recognizer this initializes with `p`.
    pub fn extend_front_with(&mut self, p: Vec2<T>) -> bool {
        let Some(state) = self.state.as_ref() else {
            self.state = Some(Self::single_state(p));
            return true;
        };
        let Some((hull, fit)) = self.trial(state, p) else {
            return false;
        };
        if let Some(state) = self.state.as_mut() {
            state.window.push(p);
            state.hull = hull;
            state.fit = fit;
        }
        true
    }

    /// Whether `extend_front` would accept the next source point.
    pub fn is_extendable_front(&self) -> bool {
        match self.attached_source().peek() {
            Some(p) => self.is_extendable_front_with(p),
            None => false,
        }
    }

    /// Whether `extend_front_with(p)` would accept `p`; never mutates.
    pub fn is_extendable_front_with(&self, p: Vec2<T>) -> bool {
        match self.state.as_ref() {
            Some(state) => self.trial(state, p).is_some(),
            None => true,
        }
    }

    /// Source position (points consumed); None without a source.
    pub fn end(&self) -> Option<usize> {
        self.source.as_ref().map(|s| s.position())
    }

    /// True when a source is attached and exhausted.
    pub fn at_source_end(&self) -> bool {
        self.source.as_ref().is_some_and(|s| s.at_end())
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_some()
    }

    pub fn cfg(&self) -> SegmentCfg {
        self.cfg
    }

    /// Window length (0 when uninitialized).
    pub fn number_segment_points(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.window.len())
    }

    /// Accepted points in insertion order.
    pub fn points(&self) -> &[Vec2<T>] {
        &self.state().window
    }

    /// First and last accepted point.
    pub fn extremity_points(&self) -> (Vec2<T>, Vec2<T>) {
        let w = &self.state().window;
        (w[0], w[w.len() - 1])
    }

    pub fn antipodal_leaning_points(&self) -> AntipodalPair<T> {
        self.state().fit.pair
    }

    /// Hull vertices in ccw order.
    pub fn convex_hull(&self) -> Vec<Vec2<T>> {
        self.state().hull.vertices()
    }

    pub fn normal(&self) -> Vec2<T::Wide> {
        self.state().fit.strip.normal
    }

    pub fn mu(&self) -> T::Wide {
        self.state().fit.strip.mu
    }

    pub fn nu(&self) -> T::Wide {
        self.state().fit.strip.nu
    }

    /// Width of the current strip under `cfg().thickness`.
    pub fn thickness(&self) -> f64 {
        self.state().fit.thickness(self.cfg.thickness)
    }

    /// Copy of the current strip, usable as a membership predicate.
    pub fn primitive(&self) -> ParallelStrip<T> {
        self.state().fit.strip
    }

    /// Corners of the strip clipped to the hull's extent along the strip.
    ///
    /// Order: lower line from low to high, then upper line back. A single
    /// point yields four copies of itself.
    pub fn bounding_rectangle(&self) -> [Vec2<f64>; 4] {
        let state = self.state();
        let Some((n, lo, hi)) = state.fit.strip.unit_frame() else {
            let p = to_real(&state.window[0]);
            return [p; 4];
        };
        let d = Vec2::new(-n.y, n.x);
        let (tmin, tmax) = state
            .hull
            .iter()
            .map(|v| d.dot(&to_real(v)))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(a, b), t| (a.min(t), b.max(t)));
        [
            n * lo + d * tmin,
            n * lo + d * tmax,
            n * hi + d * tmax,
            n * hi + d * tmin,
        ]
    }

    /// Real-valued unit normal of the current strip (None for a single point).
    pub fn unit_normal(&self) -> Option<Vec2<f64>> {
        let n = wide_to_real::<T>(&self.normal());
        let len = n.norm();
        (len > 0.0).then(|| n / len)
    }

    fn attach(&mut self, mut source: S) -> bool {
        self.state = source.next_point().map(Self::single_state);
        self.source = Some(source);
        self.state.is_some()
    }

    fn attached_source(&self) -> &S {
        match self.source.as_ref() {
            Some(s) => s,
            None => panic!("extend_front() needs a point source; use extend_front_with(p)"),
        }
    }

    #[track_caller]
    fn state(&self) -> &State<T> {
        match self.state.as_ref() {
            Some(s) => s,
            None => panic!("AlphaThickSegment queried before initialization"),
        }
    }

    fn single_state(p: Vec2<T>) -> State<T> {
        let mut hull = IncrementalHull::new();
        hull.add(p);
        State {
            window: vec![p],
            hull,
            fit: point_fit(p),
        }
    }

    fn fit_state(&self, window: Vec<Vec2<T>>, hull: IncrementalHull<T>) -> Option<State<T>> {
        let fit = fit_of(&hull, self.cfg.thickness)?;
        Some(State { window, hull, fit })
    }

    /// Trial insertion of `p`; Some(new hull, new fit) iff within `alpha`.
    fn trial(
        &self,
        state: &State<T>,
        p: Vec2<T>,
    ) -> Option<(IncrementalHull<T>, AntipodalFit<T>)> {
        let mut hull = state.hull.clone();
        hull.add(p);
        let fit = fit_of(&hull, self.cfg.thickness)?;
        let w = fit.thickness(self.cfg.thickness);
        if w <= self.cfg.alpha {
            Some((hull, fit))
        } else {
            trace!(
                width = w,
                alpha = self.cfg.alpha,
                window = state.window.len(),
                "extension rejected"
            );
            None
        }
    }
}

fn fit_of<T: Coord>(
    hull: &IncrementalHull<T>,
    def: ThicknessDefinition,
) -> Option<AntipodalFit<T>> {
    antipodal(&hull.vertices(), def)
}

fn point_fit<T: Coord>(p: Vec2<T>) -> AntipodalFit<T> {
    let zero = Vec2::new(T::WIDE_ZERO, T::WIDE_ZERO);
    AntipodalFit {
        pair: AntipodalPair { p, q: p, s: p },
        strip: ParallelStrip::new(zero, T::WIDE_ZERO, T::WIDE_ZERO),
    }
}
