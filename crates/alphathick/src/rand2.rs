//! Reproducible random planar point sets (box clouds, star chains, noisy strips).
//!
//! Purpose
//! - Deterministic inputs for property tests, benches and demos of the hull
//!   algorithms and the thick-segment recognizer.
//!
//! Model
//! - `draw_box_points`: i.i.d. lattice points in a half-open square.
//! - `draw_star_chain`: lattice points in an annulus, ordered by exact polar
//!   angle around the center (closer first on a shared ray). The result is a
//!   simple polygonal chain, the precondition of Melkman's algorithm.
//! - `draw_noisy_strip`: real samples advancing along a direction with
//!   bounded perpendicular noise; every sample lies inside a strip of the
//!   configured width and the chain is monotone along the direction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! References
//! - Code cross-refs: `hull2::{melkman, IncrementalHull}`, `thick::AlphaThickSegment`

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{orientation, sq_dist_wide, Vec2};

/// Error type shared by the samplers.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplerError {
    InvalidParams { reason: String },
}

impl SamplerError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SamplerError {}

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
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

/// Uniform lattice points in `[lo, hi)²`.
#[derive(Clone, Copy, Debug)]
pub struct BoxCfg {
    pub count: PointCount,
    pub lo: i32,
    pub hi: i32,
}

impl Default for BoxCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(1000),
            lo: 0,
            hi: 256,
        }
    }
}

/// Lattice points in an annulus around `center`, ordered into a star chain.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub count: PointCount,
    pub center: (i32, i32),
    pub r_min: f64,
    pub r_max: f64,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Uniform { min: 20, max: 120 },
            center: (0, 0),
            r_min: 20.0,
            r_max: 200.0,
        }
    }
}

/// Real samples along a direction with perpendicular noise in `[0, width]`.
#[derive(Clone, Copy, Debug)]
pub struct StripCfg {
    pub count: PointCount,
    pub origin: (f64, f64),
    /// Direction angle in radians; `None` draws one uniformly.
    pub angle: Option<f64>,
    /// Mean step along the direction (steps are uniform in `(0, 2·step]`).
    pub step: f64,
    pub width: f64,
}

impl Default for StripCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(200),
            origin: (0.0, 0.0),
            angle: None,
            step: 1.0,
            width: 2.0,
        }
    }
}

/// Draw i.i.d. lattice points in `[cfg.lo, cfg.hi)²`.
pub fn draw_box_points(cfg: BoxCfg, tok: ReplayToken) -> Result<Vec<Vec2<i32>>, SamplerError> {
    if cfg.lo >= cfg.hi {
        return Err(SamplerError::invalid("box needs lo < hi"));
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    Ok((0..n)
        .map(|_| Vector2::new(rng.gen_range(cfg.lo..cfg.hi), rng.gen_range(cfg.lo..cfg.hi)))
        .collect())
}

/// Draw a simple star-shaped chain of lattice points (duplicates removed).
pub fn draw_star_chain(cfg: StarCfg, tok: ReplayToken) -> Result<Vec<Vec2<i32>>, SamplerError> {
    if !(cfg.r_min.is_finite() && cfg.r_max.is_finite()) {
        return Err(SamplerError::invalid("radius bounds must be finite"));
    }
    if cfg.r_min < 1.0 || cfg.r_min > cfg.r_max {
        return Err(SamplerError::invalid("need 1 <= r_min <= r_max"));
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let c = Vector2::new(cfg.center.0, cfg.center.1);
    let mut pts: Vec<Vec2<i32>> = (0..n)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = rng.gen_range(cfg.r_min..=cfg.r_max);
            Vector2::new(
                c.x + (th.cos() * r).round() as i32,
                c.y + (th.sin() * r).round() as i32,
            )
        })
        .filter(|p| *p != c)
        .collect();
    pts.sort_by(|a, b| polar_cmp(&c, a, b));
    pts.dedup();
    Ok(pts)
}

/// Draw a monotone noisy chain inside a strip of width `cfg.width`.
pub fn draw_noisy_strip(cfg: StripCfg, tok: ReplayToken) -> Result<Vec<Vec2<f64>>, SamplerError> {
    if !(cfg.step.is_finite() && cfg.step > 0.0) {
        return Err(SamplerError::invalid("step must be finite and positive"));
    }
    if !(cfg.width.is_finite() && cfg.width >= 0.0) {
        return Err(SamplerError::invalid("width must be finite and non-negative"));
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let angle = match cfg.angle {
        Some(a) if a.is_finite() => a,
        Some(_) => return Err(SamplerError::invalid("angle must be finite")),
        None => rng.gen::<f64>() * std::f64::consts::TAU,
    };
    let dir = Vector2::new(angle.cos(), angle.sin());
    let perp = Vector2::new(-dir.y, dir.x);
    let origin = Vector2::new(cfg.origin.0, cfg.origin.1);
    let mut t = 0.0;
    Ok((0..n)
        .map(|_| {
            t += cfg.step * (1.0 - rng.gen::<f64>()) * 2.0;
            let off = rng.gen::<f64>() * cfg.width;
            origin + dir * t + perp * off
        })
        .collect())
}

/// Exact polar order around `c`: angles in `[0, 2π)`, closer first on a ray.
fn polar_cmp(c: &Vec2<i32>, a: &Vec2<i32>, b: &Vec2<i32>) -> Ordering {
    let half = |p: &Vec2<i32>| {
        let (dx, dy) = (p.x - c.x, p.y - c.y);
        if dy > 0 || (dy == 0 && dx > 0) {
            0
        } else {
            1
        }
    };
    half(a).cmp(&half(b)).then_with(|| {
        let o = orientation(c, a, b);
        if o > 0 {
            Ordering::Less
        } else if o < 0 {
            Ordering::Greater
        } else {
            sq_dist_wide(c, a).cmp(&sq_dist_wide(c, b))
        }
    })
}
