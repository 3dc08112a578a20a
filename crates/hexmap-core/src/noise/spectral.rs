//! Spectral synthesis with a `1/f^(β/2)` amplitude spectrum.
//!
//! Every frequency is summed directly into every cell, which costs
//! `O(W·H·(W/2)·(H/2))`. Keep it for small maps.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::heightmap::Heightmap;

/// Build a `height × width` field from random-phase cosines, rescaled to `[-1, 1]`.
///
/// A field with no frequencies (either side below 2) stays flat at zero.
pub fn spectral_synthesis(width: usize, height: usize, beta: f64, seed: i64) -> Heightmap {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut out = Heightmap::flat(width, height);

    for fy in 0..height / 2 {
        for fx in 0..width / 2 {
            let f = ((fx * fx + fy * fy) as f64).sqrt().max(1.0);
            let amplitude = 1.0 / f.powf(beta / 2.0);
            let phase = rng.gen::<f64>() * 2.0 * PI;

            for y in 0..height {
                for x in 0..width {
                    let arg = 2.0
                        * PI
                        * ((fx * x) as f64 / width as f64 + (fy * y) as f64 / height as f64);
                    out.data[y * width + x] += amplitude * (arg + phase).cos();
                }
            }
        }
    }

    let (lo, hi) = (out.min_value(), out.max_value());
    let span = hi - lo;
    if span > 0.0 && span.is_finite() {
        for v in &mut out.data {
            *v = 2.0 * (*v - lo) / span - 1.0;
        }
    } else {
        out.data.fill(0.0);
    }
    out
}
