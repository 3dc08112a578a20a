//! Terrain configuration, per-hex tiles and the persisted terrain document.

use serde::{Deserialize, Serialize};

use crate::coords::AxialCoord;
use crate::error::TerrainError;
use crate::generator::generate_terrain;
use crate::grid::Grid;
use crate::metrics::{validate_terrain, TerrainStats};
use crate::noise::params::NoiseParameters;

// ── Earth reference constants ───────────────────────────────────────────────

/// Challenger Deep, metres.
pub const ELEVATION_MIN: f64 = -11_000.0;
/// Everest, metres.
pub const ELEVATION_MAX: f64 = 8_849.0;
pub const SEA_LEVEL_DEFAULT: f64 = 0.0;
/// Fraction of Earth's surface above sea level.
pub const LAND_RATIO_EARTH: f64 = 0.29;

/// Parameters for one terrain generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    pub seed: i64,
    /// Tiles strictly above this elevation (metres) are land.
    pub sea_level: f64,
    /// Target land fraction used by hypsometric shaping.
    pub land_ratio: f64,
    pub noise_params: NoiseParameters,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sea_level: SEA_LEVEL_DEFAULT,
            land_ratio: LAND_RATIO_EARTH,
            noise_params: NoiseParameters::default(),
        }
    }
}

impl TerrainConfig {
    pub fn with_seed(seed: i64) -> Self {
        Self { seed, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        if !(0.0..=1.0).contains(&self.land_ratio) {
            return Err(TerrainError::config("land_ratio must be between 0.0 and 1.0"));
        }
        if !self.sea_level.is_finite() {
            return Err(TerrainError::config("sea_level must be finite"));
        }
        self.noise_params.validate()
    }
}

/// One hex of generated terrain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexTile {
    pub coordinates: AxialCoord,
    /// Metres relative to sea level 0.
    pub elevation: f64,
    pub is_land: bool,
    /// Kilometres to the nearest water tile. Not computed yet; always 0.
    pub distance_to_water: f64,
}

impl HexTile {
    pub fn new(coordinates: AxialCoord, elevation: f64, sea_level: f64) -> Self {
        let mut tile = Self { coordinates, elevation, is_land: false, distance_to_water: 0.0 };
        tile.classify_land_water(sea_level);
        tile
    }

    pub fn classify_land_water(&mut self, sea_level: f64) {
        self.is_land = self.elevation > sea_level;
    }

    /// Water depth below `sea_level`, or 0 on land.
    pub fn depth(&self, sea_level: f64) -> f64 {
        if self.elevation < sea_level {
            sea_level - self.elevation
        } else {
            0.0
        }
    }

    /// Height above `sea_level`, or 0 under water.
    pub fn height_above(&self, sea_level: f64) -> f64 {
        if self.elevation > sea_level {
            self.elevation - sea_level
        } else {
            0.0
        }
    }

    /// Elevation lies between the Challenger Deep and Everest.
    pub fn is_realistic(&self) -> bool {
        (ELEVATION_MIN..=ELEVATION_MAX).contains(&self.elevation)
    }
}

/// The persisted form of a generation run: `{config, stats, tiles}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainDocument {
    pub config: TerrainConfig,
    pub stats: TerrainStats,
    pub tiles: Vec<HexTile>,
}

impl TerrainDocument {
    pub fn new(config: TerrainConfig, tiles: Vec<HexTile>) -> Self {
        let stats = validate_terrain(&tiles);
        Self { config, stats, tiles }
    }

    /// Generate terrain for `grid` and wrap it in a document.
    pub fn generate<T>(grid: &Grid<T>, config: TerrainConfig) -> Result<Self, TerrainError> {
        let tiles = generate_terrain(grid, &config)?;
        Ok(Self::new(config, tiles))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Re-run generation with the stored config and report whether tiles
    /// and stats come out bit-identical.
    pub fn regenerate<T>(&self, grid: &Grid<T>) -> Result<bool, TerrainError> {
        let fresh = Self::generate(grid, self.config)?;
        let tiles_match = fresh.tiles.len() == self.tiles.len()
            && fresh.tiles.iter().zip(&self.tiles).all(|(a, b)| same_tile(a, b));
        Ok(tiles_match && fresh.stats.bitwise_eq(&self.stats))
    }
}

fn same_tile(a: &HexTile, b: &HexTile) -> bool {
    a.coordinates == b.coordinates
        && a.elevation.to_bits() == b.elevation.to_bits()
        && a.is_land == b.is_land
        && a.distance_to_water.to_bits() == b.distance_to_water.to_bits()
}
