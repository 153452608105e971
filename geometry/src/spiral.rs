use std::f64::consts::FRAC_PI_2;

use crate::Point;

/// The golden ratio φ = (1 + √5) / 2.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Samples per quarter turn used when the caller has no preference.
pub const DEFAULT_POINTS_PER_QUARTER: u32 = 200;

/// Radius of the golden spiral `r = a * φ^(θ / (π/2))` at angle `theta`.
/// The radius grows by φ every quarter turn.
pub fn golden_radius(a: f64, theta: f64) -> f64 {
    a * GOLDEN_RATIO.powf(theta / FRAC_PI_2)
}

/// Samples the golden spiral starting at radius `a` on the positive x axis.
///
/// Returns `quarter_turns * points_per_quarter + 1` points, evenly spaced in
/// angle, so that the last point lies exactly `quarter_turns` quarter turns
/// from the first.
pub fn golden_spiral_points(a: f64, quarter_turns: u32, points_per_quarter: u32) -> Vec<Point> {
    let total = quarter_turns as usize * points_per_quarter as usize + 1;
    let step = FRAC_PI_2 / points_per_quarter as f64;
    (0..total)
        .map(|i| {
            let theta = i as f64 * step;
            let r = golden_radius(a, theta);
            Point::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}
