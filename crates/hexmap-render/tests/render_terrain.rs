use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use hexmap_core::{generate_terrain, validate_terrain, Grid, GridConfig, TerrainConfig, Topology};
use hexmap_render::{
    export_with_metadata, read_metadata, sidecar_path, ColorScheme, HexRenderer, RenderConfig, RenderLayer,
    RenderMetadata, BACKGROUND,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hexmap-render-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn small_terrain() -> Vec<hexmap_core::HexTile> {
    let grid = Grid::new(GridConfig::new(20, 14, Topology::Region));
    generate_terrain(&grid, &TerrainConfig::with_seed(11)).unwrap()
}

fn config(layers: Vec<RenderLayer>, scheme: ColorScheme) -> RenderConfig {
    RenderConfig { width: 240, height: 180, hex_size: 6.0, layers, color_scheme: scheme, quality: 90 }
}

#[test]
fn terrain_covers_the_canvas_centre() {
    let tiles = small_terrain();
    let mut renderer = HexRenderer::new(config(vec![RenderLayer::Elevation], ColorScheme::Elevation)).unwrap();
    let img = renderer.render(&tiles);
    assert_eq!(img.dimensions(), (240, 180));
    assert_ne!(*img.get_pixel(120, 90), BACKGROUND);
    // 20 columns of 6 px hexes span 177 px, leaving background at the sides.
    assert_eq!(*img.get_pixel(0, 90), BACKGROUND);
    assert_eq!(*img.get_pixel(239, 90), BACKGROUND);
}

#[test]
fn every_scheme_renders_opaque_pixels() {
    let tiles = small_terrain();
    for scheme in ColorScheme::ALL {
        let layers = vec![RenderLayer::Elevation, RenderLayer::Water, RenderLayer::DebugCoords];
        let mut renderer = HexRenderer::new(config(layers, scheme)).unwrap();
        let img = renderer.render(&tiles);
        assert!(img.pixels().all(|p| p[3] == 255), "scheme {scheme}");
    }
}

#[test]
fn png_export_writes_image_and_sidecar() {
    let dir = scratch_dir("png");
    let tiles = small_terrain();
    let cfg = config(vec![RenderLayer::Elevation, RenderLayer::Water], ColorScheme::Realistic);
    let mut renderer = HexRenderer::new(cfg.clone()).unwrap();
    let img = renderer.render(&tiles).clone();

    let stats = validate_terrain(&tiles);
    let meta = RenderMetadata::new(11, "terrain", cfg, stats.clone());
    let path = dir.join("terrain.png");
    let sidecar = export_with_metadata(&img, &path, &meta).unwrap();
    assert_eq!(sidecar, sidecar_path(&path));

    let decoded = image::open(&path).unwrap().into_rgba8();
    assert_eq!(decoded, img);

    let back = read_metadata(&path).unwrap();
    assert_eq!(back.world_seed, 11);
    assert_eq!(back.terrain_stats.total_tiles, 280);
    assert_abs_diff_eq!(back.terrain_stats.land_percentage, stats.land_percentage, epsilon = 1e-12);
    assert_eq!(back, meta);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn jpeg_export_uses_configured_quality() {
    let dir = scratch_dir("jpeg");
    let tiles = small_terrain();
    let cfg = config(vec![RenderLayer::Elevation], ColorScheme::Grayscale);
    let mut renderer = HexRenderer::new(cfg.clone()).unwrap();
    let img = renderer.render(&tiles).clone();

    let meta = RenderMetadata::new(11, "terrain", cfg, validate_terrain(&tiles));
    let path = dir.join("terrain.jpg");
    export_with_metadata(&img, &path, &meta).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (240, 180));
    assert_eq!(read_metadata(&path).unwrap().view_config.quality, 90);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_directory_is_an_io_error() {
    let tiles = small_terrain();
    let cfg = config(vec![RenderLayer::Elevation], ColorScheme::Debug);
    let mut renderer = HexRenderer::new(cfg.clone()).unwrap();
    let img = renderer.render(&tiles).clone();
    let meta = RenderMetadata::new(0, "terrain", cfg, validate_terrain(&tiles));
    let path = std::env::temp_dir().join("hexmap-render-no-such-dir").join("deeper").join("x.jpg");
    assert!(export_with_metadata(&img, path, &meta).is_err());
}
