//! Multi-octave combination of Diamond–Square layers.

use super::diamond_square::{diamond_square_on, LatticeSize};
use super::params::NoiseParameters;
use crate::heightmap::Heightmap;

/// Roughness of every octave's lattice.
const OCTAVE_ROUGHNESS: f64 = 0.5;
/// Seed stride between octaves.
const OCTAVE_SEED_STRIDE: i64 = 1000;

/// Sum `params.octaves` Diamond–Square layers into a `height × width` map.
///
/// Octave `i` uses seed `seed + 1000·i` and is sampled at
/// `⌊coord · frequency⌋ mod N`. The sum is divided by the total amplitude,
/// so values stay roughly in `[-1, 1]`.
pub fn multi_octave_noise(width: usize, height: usize, params: &NoiseParameters, seed: i64) -> Heightmap {
    let mut out = Heightmap::flat(width, height);
    if out.is_empty() {
        return out;
    }

    let lattice = LatticeSize::enclosing(width.max(height));
    let n = lattice.get();

    let mut amplitude = 1.0;
    let mut frequency = params.scale;
    let mut amplitude_sum = 0.0;

    for octave in 0..params.octaves {
        let octave_seed = seed.wrapping_add(i64::from(octave) * OCTAVE_SEED_STRIDE);
        let layer = diamond_square_on(lattice, OCTAVE_ROUGHNESS, octave_seed);

        for y in 0..height {
            let ny = (y as f64 * frequency) as usize % n;
            for x in 0..width {
                let nx = (x as f64 * frequency) as usize % n;
                let i = y * width + x;
                out.data[i] += layer.get(ny, nx) * amplitude;
            }
        }

        amplitude_sum += amplitude;
        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }

    if amplitude_sum > 0.0 {
        for v in &mut out.data {
            *v /= amplitude_sum;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(octaves: u32, scale: f64) -> NoiseParameters {
        NoiseParameters { octaves, scale, ..NoiseParameters::default() }
    }

    #[test]
    fn output_has_requested_shape() {
        let hm = multi_octave_noise(37, 21, &params(6, 1.0), 42);
        assert_eq!((hm.width, hm.height), (37, 21));
        assert_eq!(hm.data.len(), 37 * 21);
        assert!(hm.all_finite());
    }

    #[test]
    fn single_octave_reproduces_lattice_samples() {
        let hm = multi_octave_noise(9, 5, &params(1, 1.0), 11);
        let layer = diamond_square_on(LatticeSize::enclosing(9), 0.5, 11);
        for y in 0..5 {
            for x in 0..9 {
                assert_eq!(hm.get(y, x), layer.get(y, x));
            }
        }
    }

    #[test]
    fn low_frequency_collapses_to_a_single_sample() {
        // 0.01 · 20 < 1, so every cell reads lattice index 0 in every octave.
        let hm = multi_octave_noise(20, 10, &params(1, 0.01), 5);
        let first = hm.get(0, 0);
        assert!(hm.data.iter().all(|&v| v == first));
    }

    #[test]
    fn same_seed_same_output() {
        let p = params(4, 0.7);
        let a = multi_octave_noise(16, 16, &p, -9);
        let b = multi_octave_noise(16, 16, &p, -9);
        assert_eq!(a, b);
        let c = multi_octave_noise(16, 16, &p, -8);
        assert_ne!(a, c);
    }

    #[test]
    fn normalised_values_stay_near_unit_range() {
        let hm = multi_octave_noise(64, 64, &params(6, 1.0), 3);
        for &v in &hm.data {
            assert!(v.abs() < 3.0, "value {v:.3} far outside [-1, 1]");
        }
    }

    #[test]
    fn extreme_seed_does_not_overflow() {
        let hm = multi_octave_noise(8, 8, &params(3, 1.0), i64::MAX);
        assert!(hm.all_finite());
    }

    #[test]
    fn empty_dimensions_give_empty_map() {
        let hm = multi_octave_noise(0, 5, &params(2, 1.0), 1);
        assert!(hm.is_empty());
    }
}
