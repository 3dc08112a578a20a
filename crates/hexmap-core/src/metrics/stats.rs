//! Summary statistics over a tile set.

use serde::{Deserialize, Serialize};

use super::hypsometric::hypsometric_match;
use crate::terrain::HexTile;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainStats {
    /// `[min, max]` elevation in metres.
    pub elevation_range: [f64; 2],
    pub elevation_mean: f64,
    /// Sample standard deviation (denominator `N − 1`).
    pub elevation_std_dev: f64,
    pub land_percentage: f64,
    pub water_percentage: f64,
    /// Agreement with Earth's hypsometric curve, 0-1.
    pub hypsometric_match: f64,
    pub total_tiles: usize,
    pub land_tiles: usize,
    pub water_tiles: usize,
}

impl TerrainStats {
    pub fn min_elevation(&self) -> f64 {
        self.elevation_range[0]
    }

    pub fn max_elevation(&self) -> f64 {
        self.elevation_range[1]
    }

    /// Field-by-field equality on the bit patterns of every float.
    pub fn bitwise_eq(&self, other: &Self) -> bool {
        let floats = |s: &Self| {
            [
                s.elevation_range[0],
                s.elevation_range[1],
                s.elevation_mean,
                s.elevation_std_dev,
                s.land_percentage,
                s.water_percentage,
                s.hypsometric_match,
            ]
        };
        floats(self).iter().zip(floats(other).iter()).all(|(a, b)| a.to_bits() == b.to_bits())
            && (self.total_tiles, self.land_tiles, self.water_tiles)
                == (other.total_tiles, other.land_tiles, other.water_tiles)
    }
}

/// Single-pass statistics; an empty slice yields all zeros.
pub fn validate_terrain(tiles: &[HexTile]) -> TerrainStats {
    if tiles.is_empty() {
        return TerrainStats::default();
    }

    let elevations: Vec<f64> = tiles.iter().map(|t| t.elevation).collect();
    let land_tiles = tiles.iter().filter(|t| t.is_land).count();
    let total = tiles.len();
    let water_tiles = total - land_tiles;

    let min = elevations.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = elevations.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let elevation_mean = mean(&elevations);

    TerrainStats {
        elevation_range: [min, max],
        elevation_mean,
        elevation_std_dev: sample_std_dev(&elevations, elevation_mean),
        land_percentage: land_tiles as f64 / total as f64 * 100.0,
        water_percentage: water_tiles as f64 / total as f64 * 100.0,
        hypsometric_match: hypsometric_match(&elevations),
        total_tiles: total,
        land_tiles,
        water_tiles,
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Zero for fewer than two values.
pub(crate) fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::AxialCoord;
    use approx::assert_abs_diff_eq;

    fn tiles(elevations: &[f64]) -> Vec<HexTile> {
        elevations
            .iter()
            .enumerate()
            .map(|(i, &e)| HexTile::new(AxialCoord::new(i as i32, 0), e, 0.0))
            .collect()
    }

    #[test]
    fn empty_input_gives_zero_stats() {
        assert_eq!(validate_terrain(&[]), TerrainStats::default());
        assert_eq!(validate_terrain(&[]).total_tiles, 0);
    }

    #[test]
    fn basic_statistics() {
        let stats = validate_terrain(&tiles(&[-3000.0, -1000.0, 500.0, 2500.0]));
        assert_eq!(stats.elevation_range, [-3000.0, 2500.0]);
        assert_abs_diff_eq!(stats.elevation_mean, -250.0, epsilon = 1e-9);
        // Deviations: -2750, -750, 750, 2750 → ss = 16_250_000, /3.
        assert_abs_diff_eq!(stats.elevation_std_dev, (16_250_000.0f64 / 3.0).sqrt(), epsilon = 1e-9);
        assert_eq!((stats.total_tiles, stats.land_tiles, stats.water_tiles), (4, 2, 2));
        assert_eq!(stats.land_percentage, 50.0);
        assert_eq!(stats.water_percentage, 50.0);
        assert!((0.0..=1.0).contains(&stats.hypsometric_match));
    }

    #[test]
    fn single_tile_has_zero_spread() {
        let stats = validate_terrain(&tiles(&[42.0]));
        assert_eq!(stats.elevation_std_dev, 0.0);
        assert_eq!(stats.elevation_range, [42.0, 42.0]);
        assert_eq!(stats.land_percentage, 100.0);
    }

    #[test]
    fn land_count_uses_tile_classification() {
        let mut ts = tiles(&[10.0, 20.0, 30.0]);
        ts[2].classify_land_water(50.0);
        let stats = validate_terrain(&ts);
        assert_eq!(stats.land_tiles, 2);
    }

    #[test]
    fn stats_json_field_names() {
        let json = serde_json::to_value(validate_terrain(&tiles(&[-5.0, 5.0]))).unwrap();
        for key in [
            "elevation_range",
            "elevation_mean",
            "elevation_std_dev",
            "land_percentage",
            "water_percentage",
            "hypsometric_match",
            "total_tiles",
            "land_tiles",
            "water_tiles",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["elevation_range"][0], -5.0);
    }
}
