//! Online convex hull of a simple polygonal chain (Melkman).
//!
//! Invariants
//! - Before three non-collinear points were seen, `dq` holds the one or two
//!   extreme points of the collinear prefix and `closed == false`.
//! - Afterwards `closed == true`, `dq.front() == dq.back()` is the seam
//!   vertex, and `dq[0..len-1]` is the hull in ccw order with no three
//!   consecutive collinear vertices.
//!
//! Insertion is amortized O(1) when points arrive along a simple chain. For
//! other orders the result is only guaranteed to contain the new point and
//! the cost is bounded by the number of evicted vertices.

use std::collections::VecDeque;
use std::ops::Index;

use crate::geom2::{orientation, within_segment, Coord, Vec2};

/// Mutable convex hull fed one point at a time.
#[derive(Clone, Debug)]
pub struct IncrementalHull<T: Coord> {
    dq: VecDeque<Vec2<T>>,
    closed: bool,
}

impl<T: Coord> Default for IncrementalHull<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coord> IncrementalHull<T> {
    pub fn new() -> Self {
        Self {
            dq: VecDeque::new(),
            closed: false,
        }
    }

    /// Hull of a chain, inserting the points in order.
    pub fn from_chain(points: &[Vec2<T>]) -> Self {
        let mut h = Self::new();
        for p in points {
            h.add(*p);
        }
        h
    }

    /// Number of hull vertices.
    #[inline]
    pub fn len(&self) -> usize {
        if self.closed {
            self.dq.len() - 1
        } else {
            self.dq.len()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dq.is_empty()
    }

    /// Vertex `i` in ccw order, starting at the most recent seam vertex.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&Vec2<T>> {
        if i < self.len() {
            self.dq.get(i)
        } else {
            None
        }
    }

    /// Vertices in ccw order.
    pub fn iter(&self) -> impl Iterator<Item = &Vec2<T>> + '_ {
        self.dq.iter().take(self.len())
    }

    /// Owned copy of the vertices in ccw order.
    pub fn vertices(&self) -> Vec<Vec2<T>> {
        self.iter().copied().collect()
    }

    /// Insert one point.
    pub fn add(&mut self, p: Vec2<T>) {
        if self.closed {
            self.add_closed(p);
        } else {
            self.add_degenerate(p);
        }
    }

    fn add_degenerate(&mut self, p: Vec2<T>) {
        match self.dq.len() {
            0 => self.dq.push_back(p),
            1 => {
                if self.dq[0] != p {
                    self.dq.push_back(p);
                }
            }
            _ => {
                let (a, b) = (self.dq[0], self.dq[1]);
                let o = orientation(&a, &b, &p);
                if o > T::WIDE_ZERO {
                    self.dq = VecDeque::from(vec![p, a, b, p]);
                    self.closed = true;
                } else if o < T::WIDE_ZERO {
                    self.dq = VecDeque::from(vec![p, b, a, p]);
                    self.closed = true;
                } else if !within_segment(&a, &b, &p) {
                    // Collinear and outside: p replaces the endpoint it passed.
                    if within_segment(&a, &p, &b) {
                        self.dq[1] = p;
                    } else {
                        self.dq[0] = p;
                    }
                }
            }
        }
    }

    fn add_closed(&mut self, p: Vec2<T>) {
        let n = self.dq.len();
        let (back_a, back_b) = (self.dq[n - 2], self.dq[n - 1]);
        let (front_a, front_b) = (self.dq[0], self.dq[1]);
        if Self::weakly_left(&back_a, &back_b, &p) && Self::weakly_left(&front_a, &front_b, &p) {
            return;
        }
        while self.dq.len() > 2 {
            let m = self.dq.len();
            if orientation(&self.dq[m - 2], &self.dq[m - 1], &p) > T::WIDE_ZERO {
                break;
            }
            self.dq.pop_back();
        }
        while self.dq.len() > 2 {
            if orientation(&p, &self.dq[0], &self.dq[1]) > T::WIDE_ZERO {
                break;
            }
            self.dq.pop_front();
        }
        self.dq.push_back(p);
        self.dq.push_front(p);
    }

    /// `p` strictly left of `a → b`, or on the closed segment `[a, b]`.
    #[inline]
    fn weakly_left(a: &Vec2<T>, b: &Vec2<T>, p: &Vec2<T>) -> bool {
        let o = orientation(a, b, p);
        o > T::WIDE_ZERO || (o == T::WIDE_ZERO && within_segment(a, b, p))
    }
}

impl<T: Coord> Index<usize> for IncrementalHull<T> {
    type Output = Vec2<T>;

    fn index(&self, i: usize) -> &Vec2<T> {
        assert!(i < self.len(), "hull index {i} out of range ({})", self.len());
        &self.dq[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::lex_cmp;
    use crate::hull2::{andrew, circularly_equal};
    use nalgebra::vector;

    #[test]
    fn degenerate_prefix_keeps_extremes() {
        let mut h = IncrementalHull::new();
        assert!(h.is_empty());
        h.add(vector![0, 0]);
        h.add(vector![0, 0]);
        assert_eq!(h.len(), 1);
        h.add(vector![2, 2]);
        h.add(vector![1, 1]);
        assert_eq!(h.vertices(), vec![vector![0, 0], vector![2, 2]]);
        h.add(vector![3, 3]);
        assert_eq!(h.vertices(), vec![vector![0, 0], vector![3, 3]]);
        h.add(vector![-1, -1]);
        assert_eq!(h.vertices(), vec![vector![-1, -1], vector![3, 3]]);
    }

    #[test]
    fn triangle_is_ccw_either_way() {
        let mut h = IncrementalHull::new();
        h.add(vector![0i32, 0]);
        h.add(vector![4, 0]);
        h.add(vector![0, -3]);
        assert_eq!(h.len(), 3);
        let v = h.vertices();
        assert!(orientation(&v[0], &v[1], &v[2]) > 0i64);
        assert!(circularly_equal(
            &v,
            &[vector![0, 0], vector![0, -3], vector![4, 0]]
        ));
    }

    #[test]
    fn staircase_melkman_steps() {
        let h = IncrementalHull::from_chain(&[
            vector![72, 0],
            vector![73, 0],
            vector![73, 1],
            vector![74, 1],
        ]);
        assert_eq!(
            h.vertices(),
            vec![vector![74, 1], vector![73, 1], vector![72, 0], vector![73, 0]]
        );
        assert_eq!(h[2], vector![72, 0]);
        assert!(h.get(4).is_none());
    }

    #[test]
    fn collinear_extension_evicts_seam() {
        // Run along y = 0, then up along x = 40: intermediate points vanish.
        let mut pts: Vec<_> = (0..=40).map(|x| vector![x, 0]).collect();
        pts.extend((1..=5).map(|y| vector![40, y]));
        let h = IncrementalHull::from_chain(&pts);
        assert!(circularly_equal(
            &h.vertices(),
            &[vector![0, 0], vector![40, 0], vector![40, 5]]
        ));
    }

    #[test]
    fn point_on_seam_edge_is_skipped() {
        // Chain (2,0) → (1,1) → (0,0) → (1,0): the last point lies on a hull edge.
        let h = IncrementalHull::from_chain(&[
            vector![2, 0],
            vector![1, 1],
            vector![0, 0],
            vector![1, 0],
        ]);
        assert_eq!(h.len(), 3);
        assert!(circularly_equal(
            &h.vertices(),
            &[vector![0, 0], vector![2, 0], vector![1, 1]]
        ));
    }

    #[test]
    fn clone_is_independent() {
        let mut a = IncrementalHull::from_chain(&[vector![0.0, 0.0], vector![1.0, 0.0]]);
        let b = a.clone();
        a.add(vector![0.5, 2.0]);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
        assert_eq!(b[0], vector![0.0, 0.0]);
    }

    #[test]
    fn sorted_chain_matches_andrew() {
        let mut pts = vec![
            vector![3, 1],
            vector![0, 0],
            vector![5, 5],
            vector![2, 4],
            vector![4, -2],
            vector![1, 2],
            vector![6, 1],
        ];
        pts.sort_by(lex_cmp);
        let inc = IncrementalHull::from_chain(&pts);
        assert!(circularly_equal(&inc.vertices(), &andrew(&pts)));
    }
}
