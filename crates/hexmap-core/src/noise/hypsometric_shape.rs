//! Reshape a raw `[-1, 1]` heightmap towards Earth's hypsometric curve.
//!
//! The sea-level threshold is picked by rank so that the requested land
//! fraction lands above it. Ocean cells follow a cubic falloff to
//! `-OCEAN_FLOOR_M`; land cells rise on a `u^2.5` curve to `PEAK_M`.

use crate::heightmap::Heightmap;

/// Deepest shaped ocean floor, metres below sea level.
pub const OCEAN_FLOOR_M: f64 = 6000.0;
/// Highest shaped peak, metres above sea level.
pub const PEAK_M: f64 = 8800.0;

/// Raw value below which `1 - land_ratio` of `values` fall.
///
/// Index `⌊N·(1 − L)⌋` of the ascending sort, clamped to the last element.
/// None for an empty slice.
pub fn sea_level_threshold(values: &[f64], land_ratio: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    let idx = ((n as f64 * (1.0 - land_ratio)).floor() as usize).min(n - 1);
    Some(sorted[idx])
}

/// Map raw values to metres with sea level at 0.
///
/// A `land_ratio` outside the open interval (0, 1) returns the input unchanged.
pub fn apply_hypsometric_curve(mut hm: Heightmap, land_ratio: f64) -> Heightmap {
    if !(land_ratio > 0.0 && land_ratio < 1.0) {
        return hm;
    }
    let Some(threshold) = sea_level_threshold(&hm.data, land_ratio) else {
        return hm;
    };
    tracing::debug!(threshold, land_ratio, "hypsometric threshold");

    for v in &mut hm.data {
        *v = shape_value(*v, threshold);
    }
    hm
}

fn shape_value(v: f64, threshold: f64) -> f64 {
    if v <= threshold {
        let u = if threshold == 0.0 { 0.0 } else { (v / threshold).clamp(0.0, 1.0) };
        -u.powi(3) * OCEAN_FLOOR_M
    } else {
        let u = if threshold < 1.0 {
            ((v - threshold) / (1.0 - threshold)).clamp(0.0, 1.0)
        } else {
            1.0
        };
        u.powf(2.5) * PEAK_M
    }
}
