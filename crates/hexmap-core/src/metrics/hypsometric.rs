//! Comparison of an elevation distribution against Earth's hypsometric curve.

use super::stats::mean;
use crate::terrain::HexTile;

/// Percentile levels sampled from the sorted elevations.
pub const PERCENTILE_LEVELS: [f64; 10] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95];

/// Approximate Earth elevation (metres) at each of [`PERCENTILE_LEVELS`].
pub const EARTH_PERCENTILES: [f64; 10] = [
    -6000.0, -4000.0, -2000.0, -500.0, -100.0, 50.0, 200.0, 500.0, 1000.0, 2000.0,
];

/// `(ρ + 1) / 2` for the Pearson correlation ρ between this distribution's
/// percentiles and Earth's. 0 for empty input.
pub fn hypsometric_match(elevations: &[f64]) -> f64 {
    if elevations.is_empty() {
        return 0.0;
    }
    let mut sorted = elevations.to_vec();
    sorted.sort_by(f64::total_cmp);
    let ours: Vec<f64> = PERCENTILE_LEVELS.iter().map(|&p| percentile_of_sorted(&sorted, p)).collect();
    (pearson(&ours, &EARTH_PERCENTILES) + 1.0) / 2.0
}

/// Elevation at each requested fraction `p ∈ [0, 1]` (index `⌊p·N⌋`, clamped).
pub fn elevation_percentiles(tiles: &[HexTile], percentiles: &[f64]) -> Vec<f64> {
    if tiles.is_empty() {
        return Vec::new();
    }
    let mut sorted: Vec<f64> = tiles.iter().map(|t| t.elevation).collect();
    sorted.sort_by(f64::total_cmp);
    percentiles.iter().map(|&p| percentile_of_sorted(&sorted, p)).collect()
}

fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    // `as usize` saturates negatives to 0.
    let idx = ((p * sorted.len() as f64) as usize).min(sorted.len() - 1);
    sorted[idx]
}

/// Pearson correlation; 0 when either side has no variance.
pub(crate) fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }
    let (mx, my) = (mean(x), mean(y));
    let mut num = 0.0;
    let mut sx = 0.0;
    let mut sy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a - mx, b - my);
        num += dx * dy;
        sx += dx * dx;
        sy += dy * dy;
    }
    let den = (sx * sy).sqrt();
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}
