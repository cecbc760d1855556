//! Minimal-width supporting strip of a convex polygon (rotating calipers).
//!
//! For every ccw edge `(p, q)` the farthest vertex `s` is tracked with a
//! single forward-moving pointer, so a full sweep costs O(h). The strip of
//! the edge with the smallest width (under the requested
//! `ThicknessDefinition`) is returned; the first such edge wins ties.

use crate::geom2::{
    dot_wide, left_normal, orientation, Coord, ParallelStrip, ThicknessDefinition, Vec2,
};

/// Edge `(p, q)` of the hull plus the hull vertex `s` farthest from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntipodalPair<T: Coord> {
    pub p: Vec2<T>,
    pub q: Vec2<T>,
    pub s: Vec2<T>,
}

/// Antipodal pair together with the strip it defines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntipodalFit<T: Coord> {
    pub pair: AntipodalPair<T>,
    pub strip: ParallelStrip<T>,
}

impl<T: Coord> AntipodalFit<T> {
    #[inline]
    pub fn thickness(&self, def: ThicknessDefinition) -> f64 {
        self.strip.thickness(def)
    }
}

/// Minimal-width strip of a ccw convex polygon.
///
/// - 1 vertex: `p = q = s`, zero normal, `mu = nu = 0`.
/// - 2 vertices: the line through both (`nu = 0`), `s = p`.
/// - ≥3 vertices: rotating calipers; `N` is the inward normal of the chosen
///   edge, `mu = N·p`, `nu = N·s − mu ≥ 0`.
///
/// Returns None for an empty polygon.
pub fn antipodal<T: Coord>(
    hull: &[Vec2<T>],
    def: ThicknessDefinition,
) -> Option<AntipodalFit<T>> {
    match hull.len() {
        0 => None,
        1 => {
            let p = hull[0];
            let zero = Vec2::new(T::WIDE_ZERO, T::WIDE_ZERO);
            Some(AntipodalFit {
                pair: AntipodalPair { p, q: p, s: p },
                strip: ParallelStrip::new(zero, T::WIDE_ZERO, T::WIDE_ZERO),
            })
        }
        2 => Some(edge_fit(hull[0], hull[1], hull[0])),
        h => {
            let mut j = 1usize;
            let mut best: Option<(f64, AntipodalFit<T>)> = None;
            for i in 0..h {
                let p = hull[i];
                let q = hull[(i + 1) % h];
                // Farthest vertex from line (p, q); the sequence of areas is
                // unimodal along the polygon and its peak only moves forward.
                let mut area = orientation(&p, &q, &hull[j]);
                loop {
                    let next = (j + 1) % h;
                    let a = orientation(&p, &q, &hull[next]);
                    if a > area {
                        j = next;
                        area = a;
                    } else {
                        break;
                    }
                }
                let fit = edge_fit(p, q, hull[j]);
                let w = fit.thickness(def);
                if best.as_ref().map_or(true, |(bw, _)| w < *bw) {
                    best = Some((w, fit));
                }
            }
            best.map(|(_, fit)| fit)
        }
    }
}

#[inline]
fn edge_fit<T: Coord>(p: Vec2<T>, q: Vec2<T>, s: Vec2<T>) -> AntipodalFit<T> {
    let normal = left_normal(&p, &q);
    let mu = dot_wide::<T>(&normal, &p);
    let nu = dot_wide::<T>(&normal, &s) - mu;
    AntipodalFit {
        pair: AntipodalPair { p, q, s },
        strip: ParallelStrip::new(normal, mu, nu),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    const EUC: ThicknessDefinition = ThicknessDefinition::Euclidean;

    #[test]
    fn empty_single_and_pair() {
        assert!(antipodal::<i32>(&[], EUC).is_none());
        let one = antipodal(&[vector![3i32, 4]], EUC).unwrap();
        assert_eq!(one.pair.s, vector![3, 4]);
        assert_eq!(one.strip.normal, vector![0i64, 0]);
        assert_eq!(one.thickness(EUC), 0.0);
        let two = antipodal(&[vector![0i32, 0], vector![5, 0]], EUC).unwrap();
        assert_eq!(two.strip.normal, vector![0i64, 5]);
        assert_eq!((two.strip.mu, two.strip.nu), (0, 0));
        assert_eq!(two.thickness(EUC), 0.0);
        assert!(two.strip.contains(&vector![9, 0]));
        assert!(!two.strip.contains(&vector![1, 1]));
    }

    #[test]
    fn right_triangle_picks_hypotenuse() {
        let hull = [vector![40i32, 5], vector![0, 0], vector![40, 0]];
        let fit = antipodal(&hull, EUC).unwrap();
        assert_eq!(
            fit.pair,
            AntipodalPair {
                p: vector![40, 5],
                q: vector![0, 0],
                s: vector![40, 0]
            }
        );
        assert_eq!(fit.strip.normal, vector![5i64, -40]);
        assert_eq!((fit.strip.mu, fit.strip.nu), (0, 200));
        assert!((fit.thickness(EUC) - 200.0 / 1625f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn parallelogram_tie_keeps_first_edge() {
        let hull = [vector![74i32, 1], vector![73, 1], vector![72, 0], vector![73, 0]];
        let fit = antipodal(&hull, EUC).unwrap();
        assert_eq!((fit.pair.p, fit.pair.q), (vector![73, 1], vector![72, 0]));
        assert_eq!(fit.strip.normal, vector![1i64, -1]);
        assert_eq!((fit.strip.mu, fit.strip.nu), (72, 1));
    }

    #[test]
    fn width_matches_brute_force_on_regular_polygon() {
        let n = 9;
        let hull: Vec<Vec2<f64>> = (0..n)
            .map(|k| {
                let t = std::f64::consts::TAU * (k as f64) / (n as f64);
                vector![t.cos(), t.sin()]
            })
            .collect();
        let fit = antipodal(&hull, EUC).unwrap();
        let brute = (0..n)
            .map(|i| {
                let (p, q) = (hull[i], hull[(i + 1) % n]);
                let len = (q - p).norm();
                hull.iter()
                    .map(|v| orientation(&p, &q, v) / len)
                    .fold(0.0, f64::max)
            })
            .fold(f64::INFINITY, f64::min);
        assert!((fit.thickness(EUC) - brute).abs() < 1e-12);
        for v in &hull {
            let d = dot_wide::<f64>(&fit.strip.normal, v);
            assert!(d >= fit.strip.mu - 1e-12 && d <= fit.strip.mu + fit.strip.nu + 1e-12);
        }
    }

    #[test]
    fn horizontal_vertical_definition_scales_by_axis() {
        // Thin diagonal rhombus: the long edges have normal (-9, 10).
        let hull = [vector![0i32, 0], vector![10, 9], vector![10, 10], vector![0, 1]];
        let e = antipodal(&hull, EUC).unwrap();
        let hv = antipodal(&hull, ThicknessDefinition::HorizontalVertical).unwrap();
        assert!(e.thickness(EUC) <= 1.0);
        assert!((hv.thickness(ThicknessDefinition::HorizontalVertical) - 1.0).abs() < 1e-12);
    }
}
