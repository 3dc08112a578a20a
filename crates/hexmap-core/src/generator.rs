//! Terrain generation pipeline.
//!
//! grid → bounding box → multi-octave heightmap → hypsometric shaping →
//! per-hex sampling. Each stage owns its output and hands it to the next.

use tracing::{debug, warn};

use crate::coords::AxialCoord;
use crate::error::TerrainError;
use crate::grid::Grid;
use crate::heightmap::Heightmap;
use crate::noise::{apply_hypsometric_curve, generate_heightmap};
use crate::terrain::{HexTile, TerrainConfig, ELEVATION_MAX, ELEVATION_MIN};

/// Generate one tile per grid cell, in [`Grid::all_coords`] order.
pub fn generate_terrain<T>(grid: &Grid<T>, config: &TerrainConfig) -> Result<Vec<HexTile>, TerrainError> {
    config.validate()?;

    let coords = grid.all_coords();
    if coords.is_empty() {
        return Err(TerrainError::config("empty grid provided"));
    }

    let (width, height) = grid_heightmap_dimensions(&coords);
    debug!(width, height, topology = ?grid.topology(), "heightmap bounds");

    let raw = generate_heightmap(width, height, &config.noise_params, config.seed);
    let shaped = apply_hypsometric_curve(raw, config.land_ratio);
    let tiles = heightmap_to_tiles(&shaped, grid, config.sea_level);

    debug!(tiles = tiles.len(), seed = config.seed, "terrain generated");
    Ok(tiles)
}

/// Sample `heightmap` at each cell's offset, reduced by floored modulus.
///
/// Kept separate from [`generate_terrain`] so callers can choose how a world
/// grid maps onto its heightmap; for full rectangular grids the heightmap
/// is exactly `width × height` and the modulus is the identity.
pub fn heightmap_to_tiles<T>(heightmap: &Heightmap, grid: &Grid<T>, sea_level: f64) -> Vec<HexTile> {
    if heightmap.is_empty() {
        warn!("sampling an empty heightmap, no tiles produced");
        return Vec::new();
    }
    grid.all_coords()
        .into_iter()
        .map(|c| {
            let (col, row) = c.to_offset();
            let elevation = heightmap.sample_wrapped(i64::from(row), i64::from(col));
            HexTile::new(c, elevation, sea_level)
        })
        .collect()
}

/// Offset-space bounding box `(width, height)` of `coords`; `(0, 0)` when empty.
pub fn grid_heightmap_dimensions(coords: &[AxialCoord]) -> (usize, usize) {
    let mut offsets = coords.iter().map(|c| c.to_offset());
    let Some((col0, row0)) = offsets.next() else {
        return (0, 0);
    };
    let (mut min_col, mut max_col, mut min_row, mut max_row) = (col0, col0, row0, row0);
    for (col, row) in offsets {
        min_col = min_col.min(col);
        max_col = max_col.max(col);
        min_row = min_row.min(row);
        max_row = max_row.max(row);
    }
    ((max_col - min_col + 1) as usize, (max_row - min_row + 1) as usize)
}

/// Linearly rescale elevations onto `[min_elev, max_elev]` and reclassify
/// against sea level 0. Flat input is left untouched.
pub fn scale_elevation_range(tiles: &mut [HexTile], min_elev: f64, max_elev: f64) {
    let Some(first) = tiles.first() else {
        return;
    };
    let (lo, hi) = tiles.iter().fold((first.elevation, first.elevation), |(lo, hi), t| {
        (lo.min(t.elevation), hi.max(t.elevation))
    });
    let span = hi - lo;
    if span == 0.0 {
        return;
    }
    let target = max_elev - min_elev;
    for t in tiles.iter_mut() {
        t.elevation = min_elev + (t.elevation - lo) / span * target;
        t.classify_land_water(0.0);
    }
}

/// Map a normalised `[-1, 1]` value onto Earth's range, stretching the
/// ocean side to the Challenger Deep and the land side to Everest.
pub fn elevation_to_realistic_range(normalized: f64) -> f64 {
    if normalized < 0.0 {
        normalized * -ELEVATION_MIN
    } else {
        normalized * ELEVATION_MAX
    }
}

/// [`generate_terrain`] with [`TerrainConfig::default`].
pub fn terrain_from_grid<T>(grid: &Grid<T>) -> Result<Vec<HexTile>, TerrainError> {
    generate_terrain(grid, &TerrainConfig::default())
}

/// [`generate_terrain`] with the default config and the given seed.
pub fn terrain_from_grid_with_seed<T>(grid: &Grid<T>, seed: i64) -> Result<Vec<HexTile>, TerrainError> {
    generate_terrain(grid, &TerrainConfig::with_seed(seed))
}
