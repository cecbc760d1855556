//! Coordinate domains for 2D points.
//!
//! - `Coord`: numeric domain of a point coordinate plus the widened type used
//!   for every determinant and dot product.
//! - `Vec2<T>`: the point type (a plain `nalgebra::Vector2`).
//!
//! The exact/real split is chosen by the coordinate type, never per value:
//! integers widen to a type that holds the determinant of two coordinate
//! differences, floats widen to `f64`.
//!
//! References
//! - Code cross-refs: `predicates::orientation`, `strip::ParallelStrip`

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::{Scalar, Vector2};

/// A 2D point (or vector) with coordinates in `T`.
pub type Vec2<T> = Vector2<T>;

/// Numeric domain of point coordinates.
///
/// `Wide` holds sums of two products of coordinate differences without
/// overflow. Exact input ranges:
/// - `i16`: the full type (widened to `i64`).
/// - `i32`: `|v| < 2^30` (widened to `i64`).
/// - `i64`: `|v| < 2^62` (widened to `i128`).
///
/// Outside these ranges integer arithmetic may overflow.
pub trait Coord: Scalar + Copy + PartialOrd {
    /// Widened arithmetic type for orientation determinants and strip offsets.
    type Wide: Scalar
        + Copy
        + PartialOrd
        + Debug
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>
        + Neg<Output = Self::Wide>;

    /// Additive identity of `Wide`.
    const WIDE_ZERO: Self::Wide;
    /// True for exact (integer) domains.
    const EXACT: bool;

    fn widen(self) -> Self::Wide;
    fn wide_to_f64(w: Self::Wide) -> f64;
    fn to_f64(self) -> f64;
}

macro_rules! impl_coord {
    ($t:ty, $wide:ty, $zero:expr, $exact:expr) => {
        impl Coord for $t {
            type Wide = $wide;
            const WIDE_ZERO: $wide = $zero;
            const EXACT: bool = $exact;
            #[inline]
            fn widen(self) -> $wide {
                self as $wide
            }
            #[inline]
            fn wide_to_f64(w: $wide) -> f64 {
                w as f64
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_coord!(i16, i64, 0, true);
impl_coord!(i32, i64, 0, true);
impl_coord!(i64, i128, 0, true);
impl_coord!(f32, f64, 0.0, false);
impl_coord!(f64, f64, 0.0, false);

/// Widen both coordinates of a point.
#[inline]
pub fn widen<T: Coord>(p: &Vec2<T>) -> Vec2<T::Wide> {
    Vector2::new(p.x.widen(), p.y.widen())
}

/// Convert a point to real coordinates (for reporting and bounding boxes).
#[inline]
pub fn to_real<T: Coord>(p: &Vec2<T>) -> Vec2<f64> {
    Vector2::new(p.x.to_f64(), p.y.to_f64())
}

/// Convert a widened vector to real coordinates.
#[inline]
pub fn wide_to_real<T: Coord>(v: &Vec2<T::Wide>) -> Vec2<f64> {
    Vector2::new(T::wide_to_f64(v.x), T::wide_to_f64(v.y))
}
