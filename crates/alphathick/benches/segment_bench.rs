//! Criterion benchmarks for alpha-thick recognition on noisy strips.
//! Focus sizes: n in {100, 1000, 5000} samples, alpha in {1, 4}.

use alphathick::rand2::{draw_noisy_strip, PointCount, ReplayToken, StripCfg};
use alphathick::thick::{greedy_segments, AlphaThickSegment, SegmentCfg, SliceCursor};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("thick");
    for &n in &[100usize, 1000, 5000] {
        let cfg = StripCfg {
            count: PointCount::Fixed(n),
            angle: Some(0.4),
            width: 2.0,
            ..StripCfg::default()
        };
        let pts = draw_noisy_strip(cfg, ReplayToken { seed: 3, index: 0 }).unwrap();

        group.bench_with_input(BenchmarkId::new("maximal_segment", n), &pts, |b, pts| {
            b.iter(|| {
                let mut seg = AlphaThickSegment::thresholded(SliceCursor::new(pts), 2.5);
                while seg.extend_front() {}
                seg.number_segment_points()
            })
        });
        for &alpha in &[1.0f64, 4.0] {
            let id = format!("n{n}_alpha{alpha}");
            group.bench_with_input(BenchmarkId::new("greedy", id), &pts, |b, pts| {
                b.iter(|| greedy_segments(pts, SegmentCfg::with_alpha(alpha)).len())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_segments);
criterion_main!(benches);
