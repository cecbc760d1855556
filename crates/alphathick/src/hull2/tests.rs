use super::*;
use crate::geom2::{lex_cmp, orientation, Vec2};
use crate::rand2::{draw_star_chain, ReplayToken, StarCfg};
use nalgebra::vector;
use proptest::prelude::*;

fn circle_sample() -> Vec<Vec2<i32>> {
    vec![
        vector![2, 0],
        vector![4, 0],
        vector![0, 3],
        vector![0, -4],
        vector![3, 4],
        vector![5, 0],
        vector![4, 3],
        vector![0, 5],
        vector![-3, -4],
        vector![-5, 0],
        vector![-4, -3],
        vector![0, -5],
        vector![3, -4],
        vector![4, -3],
        vector![-3, 4],
        vector![-4, 3],
    ]
}

fn circle_hull() -> Vec<Vec2<i32>> {
    vec![
        vector![5, 0],
        vector![4, 3],
        vector![3, 4],
        vector![0, 5],
        vector![-3, 4],
        vector![-4, 3],
        vector![-5, 0],
        vector![-4, -3],
        vector![-3, -4],
        vector![0, -5],
        vector![3, -4],
        vector![4, -3],
    ]
}

fn is_strictly_convex_ccw<T: crate::geom2::Coord>(h: &[Vec2<T>]) -> bool {
    let n = h.len();
    n < 3 || (0..n).all(|i| orientation(&h[i], &h[(i + 1) % n], &h[(i + 2) % n]) > T::WIDE_ZERO)
}

#[test]
fn lattice_circle_all_algorithms() {
    let data = circle_sample();
    let truth = circle_hull();
    let a = andrew(&data);
    let g = graham(&data);
    let mut sorted = data.clone();
    sorted.sort_by(lex_cmp);
    let m = melkman(&sorted);
    for h in [&a, &g, &m] {
        assert_eq!(h.len(), 12);
        assert!(circularly_equal(h, &truth), "hull {h:?}");
    }
}

#[test]
fn lattice_circle_online_copy_and_index() {
    let mut sorted = circle_sample();
    sorted.sort_by(lex_cmp);
    let mut ch = IncrementalHull::new();
    for p in &sorted {
        ch.add(*p);
    }
    assert_eq!(ch.len(), 12);
    assert_eq!(ch.iter().count(), 12);
    let ch2 = ch.clone();
    assert_eq!(ch[0], ch2[0]);
    assert!(circularly_equal(&ch2.vertices(), &circle_hull()));
}

#[test]
fn i16_extreme_corners() {
    let (lo, hi) = (i16::MIN, i16::MAX);
    let pts = [
        vector![lo, lo],
        vector![hi, hi],
        vector![0, 0],
        vector![hi, lo],
        vector![lo, hi],
    ];
    let truth = [vector![lo, lo], vector![hi, lo], vector![hi, hi], vector![lo, hi]];
    let mut sorted = pts.to_vec();
    sorted.sort_by(lex_cmp);
    for h in [andrew(&pts), graham(&pts), melkman(&sorted)] {
        assert!(circularly_equal(&h, &truth), "hull {h:?}");
    }
    let def = crate::geom2::ThicknessDefinition::Euclidean;
    let fit = antipodal(&truth, def).unwrap();
    assert!((fit.thickness(def) - 65535.0).abs() < 1e-9);
}

#[test]
fn degenerate_sets_have_zero_width() {
    let def = crate::geom2::ThicknessDefinition::Euclidean;
    for pts in [
        vec![vector![1, 1]],
        vec![vector![1, 1], vector![1, 1]],
        vec![vector![0, 0], vector![3, 1], vector![6, 2], vector![-3, -1]],
    ] {
        let fit = antipodal(&andrew(&pts), def).unwrap();
        assert_eq!(fit.thickness(def), 0.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn batch_algorithms_agree_on_random_sets(
        raw in prop::collection::vec((0i32..256, 0i32..256), 1000)
    ) {
        let pts: Vec<Vec2<i32>> = raw.iter().map(|&(x, y)| vector![x, y]).collect();
        let a = andrew(&pts);
        let g = graham(&pts);
        let mut sorted = pts.clone();
        sorted.sort_by(lex_cmp);
        let m = melkman(&sorted);
        prop_assert!(is_strictly_convex_ccw(&a));
        prop_assert_eq!(a.len(), g.len());
        prop_assert_eq!(a.len(), m.len());
        prop_assert!(circularly_equal(&a, &g));
        prop_assert!(circularly_equal(&a, &m));
    }

    #[test]
    fn online_hull_on_simple_chain_matches_batch(seed in any::<u64>(), index in 0u64..1000) {
        let chain = draw_star_chain(StarCfg::default(), ReplayToken { seed, index }).unwrap();
        let inc = IncrementalHull::from_chain(&chain);
        let batch = andrew(&chain);
        prop_assert!(is_strictly_convex_ccw(&inc.vertices()));
        prop_assert!(circularly_equal(&inc.vertices(), &batch));
        prop_assert!(circularly_equal(&melkman(&chain), &batch));
    }

    #[test]
    fn calipers_strip_contains_every_point(
        raw in prop::collection::vec((-500i32..500, -500i32..500), 3..200)
    ) {
        let pts: Vec<Vec2<i32>> = raw.iter().map(|&(x, y)| vector![x, y]).collect();
        let hull = andrew(&pts);
        let def = crate::geom2::ThicknessDefinition::Euclidean;
        let fit = antipodal(&hull, def).unwrap();
        for p in &pts {
            prop_assert!(fit.strip.contains(p));
        }
        // No hull edge gives a thinner enclosing strip.
        let n = hull.len();
        if n >= 3 {
            for i in 0..n {
                let (p, q) = (hull[i], hull[(i + 1) % n]);
                let len = ((q - p).cast::<f64>()).norm();
                let far = hull.iter().map(|v| orientation(&p, &q, v)).max().unwrap();
                prop_assert!(fit.thickness(def) <= far as f64 / len + 1e-9);
            }
        }
    }
}
