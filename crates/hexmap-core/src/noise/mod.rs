//! Deterministic fractal heightmap synthesis.
//!
//! Every synthesizer builds its own `StdRng` from the seed it is given;
//! there is no shared generator state.

pub mod diamond_square;
pub mod hypsometric_shape;
pub mod octaves;
pub mod params;
pub mod spectral;

pub use diamond_square::{diamond_square, is_power_of_two_plus_one, next_power_of_two_plus_one, LatticeSize};
pub use hypsometric_shape::{apply_hypsometric_curve, sea_level_threshold};
pub use octaves::multi_octave_noise;
pub use spectral::spectral_synthesis;

use crate::heightmap::Heightmap;
use params::NoiseParameters;

/// Raw `height × width` heightmap in roughly `[-1, 1]`.
pub fn generate_heightmap(width: usize, height: usize, params: &NoiseParameters, seed: i64) -> Heightmap {
    tracing::debug!(width, height, octaves = params.octaves, seed, "synthesising heightmap");
    multi_octave_noise(width, height, params, seed)
}
