use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// Fractal noise controls for multi-octave synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParameters {
    /// Number of Diamond–Square layers (1-10).
    pub octaves: u32,
    /// Amplitude multiplier between octaves, in (0, 1].
    pub persistence: f64,
    /// Frequency multiplier between octaves, > 1.
    pub lacunarity: f64,
    /// Sampling frequency of the first octave.
    pub scale: f64,
    /// Hurst exponent (0-1). Carried for downstream roughness analysis.
    pub hurst_exp: f64,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            octaves: 6,
            persistence: 0.5,
            lacunarity: 2.0,
            scale: 0.01,
            hurst_exp: 0.85,
        }
    }
}

impl NoiseParameters {
    pub fn validate(&self) -> Result<(), TerrainError> {
        if !(1..=10).contains(&self.octaves) {
            return Err(TerrainError::config("octaves must be between 1 and 10"));
        }
        if !(self.persistence > 0.0 && self.persistence <= 1.0) {
            return Err(TerrainError::config("persistence must be between 0.0 and 1.0"));
        }
        if !(self.lacunarity > 1.0) {
            return Err(TerrainError::config("lacunarity must be greater than 1.0"));
        }
        if !(self.scale > 0.0) {
            return Err(TerrainError::config("scale must be positive"));
        }
        if !(0.0..=1.0).contains(&self.hurst_exp) {
            return Err(TerrainError::config("hurst_exp must be between 0.0 and 1.0"));
        }
        Ok(())
    }
}
