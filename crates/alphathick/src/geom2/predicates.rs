//! Exact orientation predicate and small widened-arithmetic helpers.
//!
//! All products are taken after widening (`Coord::Wide`), so integer inputs
//! stay exact. Real inputs use the same formula without tolerance; nearly
//! collinear triples may report inconsistent signs.

use std::cmp::Ordering;

use super::types::{widen, Coord, Vec2};

/// Classification of the turn `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

/// Signed double area of the triangle `(a, b, c)`: `det(b − a, c − a)`.
///
/// Positive for a counterclockwise (left) turn, negative for a right turn.
#[inline]
pub fn orientation<T: Coord>(a: &Vec2<T>, b: &Vec2<T>, c: &Vec2<T>) -> T::Wide {
    let (a, b, c) = (widen(a), widen(b), widen(c));
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let (acx, acy) = (c.x - a.x, c.y - a.y);
    abx * acy - aby * acx
}

/// Sign of `orientation(a, b, c)` as a `Turn`.
#[inline]
pub fn turn<T: Coord>(a: &Vec2<T>, b: &Vec2<T>, c: &Vec2<T>) -> Turn {
    let o = orientation(a, b, c);
    if o > T::WIDE_ZERO {
        Turn::Left
    } else if o < T::WIDE_ZERO {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// Lexicographic order (x first, then y). Incomparable reals compare equal.
#[inline]
pub fn lex_cmp<T: Coord>(a: &Vec2<T>, b: &Vec2<T>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// `n · p` with `p` widened.
#[inline]
pub fn dot_wide<T: Coord>(n: &Vec2<T::Wide>, p: &Vec2<T>) -> T::Wide {
    let p = widen(p);
    n.x * p.x + n.y * p.y
}

/// Squared distance `|b − a|²` in the widened type.
#[inline]
pub fn sq_dist_wide<T: Coord>(a: &Vec2<T>, b: &Vec2<T>) -> T::Wide {
    let (a, b) = (widen(a), widen(b));
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    dx * dx + dy * dy
}

/// For `p` collinear with `a`, `b`: true iff `p` lies on the closed segment `[a, b]`.
#[inline]
pub(crate) fn within_segment<T: Coord>(a: &Vec2<T>, b: &Vec2<T>, p: &Vec2<T>) -> bool {
    let (a, b, p) = (widen(a), widen(b), widen(p));
    let d = (a.x - p.x) * (b.x - p.x) + (a.y - p.y) * (b.y - p.y);
    d <= T::WIDE_ZERO
}

/// Left (counterclockwise) normal of the edge `p → q`, unnormalized.
///
/// For a ccw hull edge this points into the polygon.
#[inline]
pub fn left_normal<T: Coord>(p: &Vec2<T>, q: &Vec2<T>) -> Vec2<T::Wide> {
    let (p, q) = (widen(p), widen(q));
    Vec2::new(-(q.y - p.y), q.x - p.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn orientation_signs_integer() {
        let a = vector![0i32, 0];
        let b = vector![4i32, 0];
        assert_eq!(orientation(&a, &b, &vector![2, 3]), 12);
        assert_eq!(orientation(&a, &b, &vector![2, -3]), -12);
        assert_eq!(orientation(&a, &b, &vector![7, 0]), 0);
        assert_eq!(turn(&a, &b, &vector![1, 1]), Turn::Left);
        assert_eq!(turn(&a, &b, &vector![1, -1]), Turn::Right);
        assert_eq!(turn(&a, &b, &vector![-1, 0]), Turn::Collinear);
    }

    #[test]
    fn orientation_is_widened() {
        // Differences of 2^30 multiply to 2^60: fine in i64, overflow in i32.
        let big = 1i32 << 30;
        let a = vector![-big / 2, -big / 2];
        let b = vector![big / 2, -big / 2];
        let c = vector![-big / 2, big / 2];
        assert_eq!(orientation(&a, &b, &c), (big as i64) * (big as i64));
    }

    #[test]
    fn orientation_at_i16_extremes() {
        let (lo, hi) = (i16::MIN, i16::MAX);
        let a = vector![lo, lo];
        let b = vector![hi, lo];
        let c = vector![lo, hi];
        assert_eq!(orientation(&a, &b, &c), 65535i64 * 65535);
        assert_eq!(orientation(&a, &c, &b), -65535i64 * 65535);
        assert_eq!(sq_dist_wide(&a, &vector![hi, hi]), 2 * 65535i64 * 65535);
    }

    #[test]
    fn orientation_near_i64_bound() {
        let m = (1i64 << 62) - 1;
        let a = vector![-m, -m];
        let b = vector![m, -m];
        let c = vector![-m, m];
        let d = 2 * (m as i128);
        assert_eq!(orientation(&a, &b, &c), d * d);
        assert_eq!(turn(&a, &c, &b), Turn::Right);
    }

    #[test]
    fn orientation_real() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        let c = vector![0.5, 0.25];
        let o: f64 = orientation(&a, &b, &c);
        assert!((o - 0.25).abs() < 1e-15);
    }

    #[test]
    fn lex_and_segment_helpers() {
        assert_eq!(lex_cmp(&vector![1, 5], &vector![2, 0]), Ordering::Less);
        assert_eq!(lex_cmp(&vector![2, 1], &vector![2, 0]), Ordering::Greater);
        assert!(within_segment(&vector![0, 0], &vector![4, 4], &vector![2, 2]));
        assert!(within_segment(&vector![0, 0], &vector![4, 4], &vector![4, 4]));
        assert!(!within_segment(&vector![0, 0], &vector![4, 4], &vector![5, 5]));
        assert_eq!(sq_dist_wide(&vector![0i32, 0], &vector![3, 4]), 25i64);
        assert_eq!(left_normal(&vector![0i32, 0], &vector![2, 0]), vector![0i64, 2]);
        assert_eq!(dot_wide::<i32>(&vector![1i64, -1], &vector![73, 1]), 72);
    }
}
