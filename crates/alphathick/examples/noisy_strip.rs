//! Segment a noisy straight curve and print the recognized pieces.
//!
//! Usage:
//!   cargo run -p alphathick --example noisy_strip -- [alpha]
//!
//! Draws a 300-sample chain with perpendicular noise of width 2 that turns
//! once halfway, then prints every greedy segment with its width.

use alphathick::geom2::Vec2;
use alphathick::rand2::{draw_noisy_strip, PointCount, ReplayToken, StripCfg};
use alphathick::thick::{greedy_segments, SegmentCfg};

fn main() {
    let alpha = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(2.5);
    let first = StripCfg {
        count: PointCount::Fixed(150),
        angle: Some(0.2),
        ..StripCfg::default()
    };
    let mut pts: Vec<Vec2<f64>> = draw_noisy_strip(first, ReplayToken { seed: 2025, index: 0 })
        .unwrap_or_default();
    let corner = pts.last().copied().unwrap_or_else(|| Vec2::new(0.0, 0.0));
    let second = StripCfg {
        count: PointCount::Fixed(150),
        origin: (corner.x, corner.y),
        angle: Some(1.4),
        ..StripCfg::default()
    };
    pts.extend(draw_noisy_strip(second, ReplayToken { seed: 2025, index: 1 }).unwrap_or_default());

    let segs = greedy_segments(&pts, SegmentCfg::with_alpha(alpha));
    println!("{} samples, alpha = {alpha}: {} segments", pts.len(), segs.len());
    for (i, s) in segs.iter().enumerate() {
        println!(
            "segment {i}: points {}..{} ({} pts), width {:.3}, from ({:.2}, {:.2}) to ({:.2}, {:.2})",
            s.start,
            s.end,
            s.len(),
            s.thickness,
            s.first.x,
            s.first.y,
            s.last.x,
            s.last.y
        );
    }
}
