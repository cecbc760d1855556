//! Parallel strips `{ p : mu ≤ N·p ≤ mu + nu }`.
//!
//! The normal is kept unnormalized (exact for integer domains); geometric
//! thickness is derived on demand according to a `ThicknessDefinition`.

use super::predicates::dot_wide;
use super::types::{wide_to_real, Coord, Vec2};

/// How a strip's `nu` is converted into a width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThicknessDefinition {
    /// Euclidean distance between the two bounding lines: `nu / ‖N‖`.
    #[default]
    Euclidean,
    /// The smaller of the horizontal and vertical distances: `nu / max(|Nx|, |Ny|)`.
    HorizontalVertical,
}

/// Region between the lines `N·p = mu` and `N·p = mu + nu`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallelStrip<T: Coord> {
    pub normal: Vec2<T::Wide>,
    pub mu: T::Wide,
    pub nu: T::Wide,
}

impl<T: Coord> ParallelStrip<T> {
    #[inline]
    pub fn new(normal: Vec2<T::Wide>, mu: T::Wide, nu: T::Wide) -> Self {
        Self { normal, mu, nu }
    }

    /// Membership test `mu ≤ N·p ≤ mu + nu` (closed on both sides).
    #[inline]
    pub fn contains(&self, p: &Vec2<T>) -> bool {
        let v = dot_wide::<T>(&self.normal, p);
        self.mu <= v && v <= self.mu + self.nu
    }

    /// Width of the strip under `def`; 0 for a zero normal.
    pub fn thickness(&self, def: ThicknessDefinition) -> f64 {
        let n = wide_to_real::<T>(&self.normal);
        let nu = T::wide_to_f64(self.nu);
        let scale = match def {
            ThicknessDefinition::Euclidean => n.norm(),
            ThicknessDefinition::HorizontalVertical => n.x.abs().max(n.y.abs()),
        };
        if scale > 0.0 {
            nu / scale
        } else {
            0.0
        }
    }

    /// Real-valued unit normal and the two line offsets along it.
    ///
    /// None for a zero normal.
    pub fn unit_frame(&self) -> Option<(Vec2<f64>, f64, f64)> {
        let n = wide_to_real::<T>(&self.normal);
        let len = n.norm();
        if !(len.is_finite()) || len <= 0.0 {
            return None;
        }
        let mu = T::wide_to_f64(self.mu) / len;
        let nu = T::wide_to_f64(self.nu) / len;
        Some((n / len, mu, mu + nu))
    }
}
