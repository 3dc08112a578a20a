use std::path::Path;

use anyhow::{Context, Result};
use hexmap_core::{
    compute_realism_score, detect_anomalies, is_realistic, HexTile, RealismIssue, TerrainDocument, TerrainStats,
    LAND_RATIO_EARTH,
};
use tracing::info;

use super::{check_mark, load_document, rule, save_document};
use crate::args::{GridArgs, GridSize, TerrainArgs};

const GENERATE_SIZE: GridSize = GridSize::new(100, 100);
const DEMO_SIZE: GridSize = GridSize::new(50, 50);

/// Strict validation thresholds.
const STRICT_HYPSOMETRIC_MIN: f64 = 0.95;
const STRICT_LAND_TOLERANCE: f64 = 1.0;

pub fn generate(grid_args: &GridArgs, terrain_args: &TerrainArgs, output: &Path) -> Result<()> {
    let grid = grid_args.grid(GENERATE_SIZE);
    let config = terrain_args.config();
    println!("Generating {}x{} terrain (seed: {})...", grid.width(), grid.height(), config.seed);

    let doc = TerrainDocument::generate(&grid, config).context("generating terrain")?;
    save_document(&doc, output)?;
    info!(path = %output.display(), tiles = doc.tiles.len(), "terrain saved");

    let stats = &doc.stats;
    println!("Terrain saved to {}", output.display());
    println!("Land coverage: {:.1}% ({}/{} tiles)", stats.land_percentage, stats.land_tiles, stats.total_tiles);
    println!("Elevation range: {:.1}m to {:.1}m", stats.min_elevation(), stats.max_elevation());
    Ok(())
}

pub fn stats(path: &Path) -> Result<()> {
    let doc = load_document(path)?;
    let (config, stats) = (&doc.config, &doc.stats);

    println!("Terrain Statistics for {}", path.display());
    println!("{}", rule(50));

    println!("Generation Parameters:");
    println!("  Seed: {}", config.seed);
    println!("  Sea Level: {:.1}m", config.sea_level);
    println!("  Target Land Ratio: {:.1}%", config.land_ratio * 100.0);
    println!("  Noise Octaves: {}", config.noise_params.octaves);
    println!("  Persistence: {:.2}", config.noise_params.persistence);

    println!("\nElevation Statistics:");
    println!(
        "  Range: {:.1}m to {:.1}m (span: {:.1}m)",
        stats.min_elevation(),
        stats.max_elevation(),
        stats.max_elevation() - stats.min_elevation()
    );
    println!("  Mean: {:.1}m", stats.elevation_mean);
    println!("  Standard Deviation: {:.1}m", stats.elevation_std_dev);

    println!("\nLand/Water Distribution:");
    println!("  Total Tiles: {}", stats.total_tiles);
    println!("  Land: {} tiles ({:.1}%)", stats.land_tiles, stats.land_percentage);
    println!("  Water: {} tiles ({:.1}%)", stats.water_tiles, stats.water_percentage);

    println!("\nQuality Metrics:");
    println!("  Hypsometric Match: {:.1}% (Earth-like curve)", stats.hypsometric_match * 100.0);
    println!("  Realism Score: {:.1}/100", compute_realism_score(stats).total);
    print_realism(stats);
    Ok(())
}

/// Fails (non-zero exit) when the terrain does not pass.
pub fn validate(path: &Path, strict: bool) -> Result<()> {
    let doc = load_document(path)?;
    let stats = hexmap_core::validate_terrain(&doc.tiles);
    let (realistic, issues) = is_realistic(&stats);
    let anomalies = detect_anomalies(&doc.tiles);

    println!("Validating terrain from {}", path.display());
    println!("{}", rule(40));
    println!("Total tiles validated: {}", doc.tiles.len());

    let mut passed = realistic && anomalies.is_empty();
    if passed {
        println!("Status: ✅ VALID - Terrain passes all realism checks");
    } else {
        println!("Status: ❌ INVALID - Issues detected");
        if !realistic {
            println!("\nRealism Issues:");
            print_issues(&issues, "  ");
        }
        if !anomalies.is_empty() {
            println!("\nElevation Anomalies:");
            for anomaly in &anomalies {
                println!("  - {anomaly}");
            }
        }
    }

    if strict {
        println!("\nStrict Mode Validation:");
        let hyps_ok = stats.hypsometric_match >= STRICT_HYPSOMETRIC_MIN;
        println!(
            "  {} Hypsometric curve match: {:.1}% (strict requires ≥{:.0}%)",
            check_mark(hyps_ok),
            stats.hypsometric_match * 100.0,
            STRICT_HYPSOMETRIC_MIN * 100.0
        );
        let target = LAND_RATIO_EARTH * 100.0;
        let land_ok = (stats.land_percentage - target).abs() <= STRICT_LAND_TOLERANCE;
        println!(
            "  {} Land ratio: {:.1}% (target: {:.1}% ± {:.0})",
            check_mark(land_ok),
            stats.land_percentage,
            target,
            STRICT_LAND_TOLERANCE
        );
        passed &= hyps_ok && land_ok;
    }

    if !passed {
        anyhow::bail!("terrain in {} failed validation", path.display());
    }
    Ok(())
}

pub fn demo(grid_args: &GridArgs, terrain_args: &TerrainArgs) -> Result<()> {
    let grid = grid_args.grid(DEMO_SIZE);
    let config = terrain_args.config();

    println!("Terrain Generation Demo - {}x{} grid (seed: {})", grid.width(), grid.height(), config.seed);
    println!("{}", rule(50));
    println!("Generating terrain...");
    let doc = TerrainDocument::generate(&grid, config).context("generating terrain")?;
    let stats = &doc.stats;

    println!("\nGeneration Results:");
    println!("  Total tiles: {}", stats.total_tiles);
    println!("  Land coverage: {:.1}% ({} tiles)", stats.land_percentage, stats.land_tiles);
    println!("  Water coverage: {:.1}% ({} tiles)", stats.water_percentage, stats.water_tiles);

    println!("\nElevation Analysis:");
    println!("  Range: {:.0}m to {:.0}m", stats.min_elevation(), stats.max_elevation());
    println!("  Mean: {:.0}m", stats.elevation_mean);
    println!("  Std Dev: {:.0}m", stats.elevation_std_dev);

    println!("\nQuality Assessment:");
    println!("  Hypsometric Match: {:.1}%", stats.hypsometric_match * 100.0);
    print_realism(stats);

    println!("\nSample Terrain Tiles:");
    println!("Coordinate  | Elevation | Type  | Depth/Height");
    println!("------------|-----------|-------|-------------");
    for tile in sample_tiles(&doc.tiles) {
        let (kind, relief) = if tile.is_land {
            ("Land", format!("{:.0}m high", tile.height_above(config.sea_level)))
        } else {
            ("Water", format!("{:.0}m deep", tile.depth(config.sea_level)))
        };
        println!(
            "({:3},{:3})   | {:8.0}  | {kind:<5} | {relief}",
            tile.coordinates.q, tile.coordinates.r, tile.elevation
        );
    }
    Ok(())
}

fn print_realism(stats: &TerrainStats) {
    let (realistic, issues) = is_realistic(stats);
    if realistic {
        println!("  Realism Check: ✅ PASS");
    } else {
        println!("  Realism Check: ❌ FAIL");
        print_issues(&issues, "    ");
    }
}

fn print_issues(issues: &[RealismIssue], indent: &str) {
    for issue in issues {
        println!("{indent}- {issue}");
    }
}

/// First, quartiles and last tile.
fn sample_tiles(tiles: &[HexTile]) -> Vec<&HexTile> {
    let n = tiles.len();
    if n == 0 {
        return Vec::new();
    }
    let mut idx = vec![0, n / 4, n / 2, 3 * n / 4, n - 1];
    idx.dedup();
    idx.into_iter().map(|i| &tiles[i]).collect()
}
