//! Procedural terrain on a hexagonal grid.
//!
//! Pipeline: grid → multi-octave Diamond–Square heightmap → hypsometric
//! shaping → per-hex sampling → statistics and realism checks.

pub mod coords;
pub mod error;
pub mod generator;
pub mod grid;
pub mod heightmap;
pub mod metrics;
pub mod noise;
pub mod terrain;

pub use coords::{axial_round, hex_distance, AxialCoord};
pub use error::TerrainError;
pub use generator::{
    elevation_to_realistic_range, generate_terrain, grid_heightmap_dimensions, heightmap_to_tiles,
    scale_elevation_range, terrain_from_grid, terrain_from_grid_with_seed,
};
pub use grid::{Grid, GridConfig, Topology};
pub use heightmap::Heightmap;
pub use metrics::{
    compute_realism_score, detect_anomalies, elevation_percentiles, is_realistic, validate_elevation_range,
    validate_terrain, Anomaly, MetricScore, RealismIssue, RealismScore, TerrainStats,
};
pub use noise::params::NoiseParameters;
pub use terrain::{
    HexTile, TerrainConfig, TerrainDocument, ELEVATION_MAX, ELEVATION_MIN, LAND_RATIO_EARTH, SEA_LEVEL_DEFAULT,
};
