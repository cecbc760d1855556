//! Batch convex hulls: Andrew's monotone chain, Graham's polar scan and
//! Melkman's chain sweep.
//!
//! All three return strict ccw hulls (extreme points only). Starting vertices
//! differ, so compare results with `circularly_equal`.

use std::cmp::Ordering;

use super::melkman::IncrementalHull;
use crate::geom2::{lex_cmp, orientation, sq_dist_wide, Coord, Vec2};

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
pub fn andrew<T: Coord>(points: &[Vec2<T>]) -> Vec<Vec2<T>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Vec2<T>> = Vec::with_capacity(pts.len());
    for p in &pts {
        pop_non_left_turns(&mut lower, p);
        lower.push(*p);
    }
    let mut upper: Vec<Vec2<T>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        pop_non_left_turns(&mut upper, p);
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Graham scan around the lowest-then-leftmost point.
///
/// Points are ordered by polar angle with `orientation` as the comparator
/// (closer first on ties), so no trigonometry is involved.
pub fn graham<T: Coord>(points: &[Vec2<T>]) -> Vec<Vec2<T>> {
    let Some(pivot) = points.iter().copied().min_by(|a, b| {
        match a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal),
            o => o,
        }
    }) else {
        return Vec::new();
    };
    let mut rest: Vec<_> = points.iter().copied().filter(|p| *p != pivot).collect();
    rest.sort_by(|a, b| {
        let o = orientation(&pivot, a, b);
        if o > T::WIDE_ZERO {
            Ordering::Less
        } else if o < T::WIDE_ZERO {
            Ordering::Greater
        } else {
            sq_dist_wide(&pivot, a)
                .partial_cmp(&sq_dist_wide(&pivot, b))
                .unwrap_or(Ordering::Equal)
        }
    });
    let mut stack: Vec<Vec2<T>> = Vec::with_capacity(points.len());
    stack.push(pivot);
    for p in &rest {
        pop_non_left_turns(&mut stack, p);
        stack.push(*p);
    }
    stack
}

/// Melkman’s linear-time hull of a simple polygonal chain.
///
/// Precondition: `chain` traces a simple (non self-intersecting) polyline,
/// e.g. any lexicographically sorted point sequence. Other inputs may yield
/// a polygon that misses extreme points.
pub fn melkman<T: Coord>(chain: &[Vec2<T>]) -> Vec<Vec2<T>> {
    IncrementalHull::from_chain(chain).vertices()
}

/// True iff `a` and `b` list the same cyclic sequence (up to rotation).
pub fn circularly_equal<P: PartialEq>(a: &[P], b: &[P]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    (0..n)
        .filter(|&k| a[k] == b[0])
        .any(|k| (0..n).all(|i| a[(k + i) % n] == b[i]))
}

#[inline]
fn pop_non_left_turns<T: Coord>(chain: &mut Vec<Vec2<T>>, p: &Vec2<T>) {
    while chain.len() >= 2 {
        let n = chain.len();
        if orientation(&chain[n - 2], &chain[n - 1], p) > T::WIDE_ZERO {
            break;
        }
        chain.pop();
    }
}
