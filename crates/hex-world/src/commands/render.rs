use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hexmap_core::TerrainDocument;
use hexmap_render::{
    export_image, export_jpeg, export_with_metadata, ColorScheme, HexRenderer, RenderConfig, RenderLayer,
    RenderMetadata,
};
use tracing::info;

use super::{load_document, rule};
use crate::args::{GridArgs, GridSize, TerrainArgs};

const DEMO_SIZE: GridSize = GridSize::new(20, 20);

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Terrain JSON written by generate-terrain.
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output image; `.jpg`/`.jpeg` writes JPEG, anything else PNG.
    #[arg(short, long, default_value = "terrain_render.jpg")]
    pub output: PathBuf,
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    #[arg(long, default_value_t = 600)]
    pub height: u32,
    /// Hex circumradius in pixels.
    #[arg(long, default_value_t = 5.0)]
    pub hex_size: f64,
    /// JPEG quality (1-100).
    #[arg(long, default_value_t = 85)]
    pub quality: u8,
    /// elevation, realistic, debug or grayscale.
    #[arg(long, default_value_t = ColorScheme::Elevation)]
    pub scheme: ColorScheme,
    /// Layers in drawing order, comma separated.
    #[arg(long = "layers", value_delimiter = ',', default_value = "elevation")]
    pub layers: Vec<RenderLayer>,
    /// Append the tile-centre debug overlay.
    #[arg(long)]
    pub show_coords: bool,
    /// Write `<output>.json` with provenance and realism metadata.
    #[arg(long)]
    pub metadata: bool,
}

impl RenderArgs {
    fn render_config(&self) -> RenderConfig {
        let mut layers = self.layers.clone();
        if self.show_coords && !layers.contains(&RenderLayer::DebugCoords) {
            layers.push(RenderLayer::DebugCoords);
        }
        RenderConfig {
            width: self.width,
            height: self.height,
            hex_size: self.hex_size,
            layers,
            color_scheme: self.scheme,
            quality: self.quality,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct DemoRenderArgs {
    #[command(flatten)]
    pub grid: GridArgs,
    #[command(flatten)]
    pub terrain: TerrainArgs,
    #[arg(long, default_value = "demo_renders")]
    pub output_dir: PathBuf,
}

pub fn render(args: &RenderArgs) -> Result<()> {
    let doc = load_document(&args.input)?;
    let config = args.render_config();
    let mut renderer = HexRenderer::new(config.clone()).context("invalid render settings")?;

    println!("Rendering {} terrain ({} tiles)...", config.color_scheme, doc.tiles.len());
    let img = renderer.render(&doc.tiles);

    if args.metadata {
        let meta = RenderMetadata::new(doc.config.seed, "terrain", config, doc.stats.clone());
        let sidecar = export_with_metadata(img, &args.output, &meta)
            .with_context(|| format!("exporting {}", args.output.display()))?;
        println!("Image saved to {} (metadata: {})", args.output.display(), sidecar.display());
    } else {
        export_image(img, &args.output, config.quality)
            .with_context(|| format!("exporting {}", args.output.display()))?;
        println!("Image saved to {}", args.output.display());
    }
    Ok(())
}

pub fn demo_render(args: &DemoRenderArgs) -> Result<()> {
    let grid = args.grid.grid(DEMO_SIZE);
    let terrain_config = args.terrain.config();
    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating output directory {}", args.output_dir.display()))?;

    println!("Rendering Demo - {}x{} grid (seed: {})", grid.width(), grid.height(), terrain_config.seed);
    println!("{}", rule(50));
    println!("Generating terrain...");
    let doc = TerrainDocument::generate(&grid, terrain_config).context("generating terrain")?;

    let base = RenderConfig { width: 600, height: 600, hex_size: 8.0, quality: 90, ..RenderConfig::default() };

    for scheme in ColorScheme::ALL {
        println!("Rendering {scheme} color scheme...");
        let config = RenderConfig { color_scheme: scheme, layers: vec![RenderLayer::Elevation], ..base.clone() };
        let mut renderer = HexRenderer::new(config.clone())?;
        let path = args.output_dir.join(format!("terrain_{scheme}.jpg"));
        export_jpeg(renderer.render(&doc.tiles), &path, config.quality)
            .with_context(|| format!("exporting {}", path.display()))?;
        println!("  Saved: {}", path.display());
    }

    println!("Rendering debug version with water and tile centres...");
    let config = RenderConfig {
        layers: vec![RenderLayer::Elevation, RenderLayer::Water, RenderLayer::DebugCoords],
        ..base
    };
    let mut renderer = HexRenderer::new(config.clone())?;
    let img = renderer.render(&doc.tiles);
    let path = args.output_dir.join("terrain_debug.png");
    let meta = RenderMetadata::new(doc.config.seed, "terrain_debug", config, doc.stats.clone());
    export_with_metadata(img, &path, &meta).with_context(|| format!("exporting {}", path.display()))?;
    println!("  Saved: {}", path.display());

    info!(dir = %args.output_dir.display(), "demo renders written");
    println!("\nDemo complete! Check {} for rendered images.", args.output_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RenderArgs {
        RenderArgs {
            input: PathBuf::from("terrain.json"),
            output: PathBuf::from("out.jpg"),
            width: 320,
            height: 200,
            hex_size: 4.0,
            quality: 70,
            scheme: ColorScheme::Realistic,
            layers: vec![RenderLayer::Elevation, RenderLayer::Water],
            show_coords: false,
            metadata: false,
        }
    }

    #[test]
    fn flags_map_onto_render_config() {
        let config = args().render_config();
        assert_eq!((config.width, config.height, config.quality), (320, 200, 70));
        assert_eq!(config.color_scheme, ColorScheme::Realistic);
        assert_eq!(config.layers, vec![RenderLayer::Elevation, RenderLayer::Water]);
    }

    #[test]
    fn show_coords_appends_overlay_once() {
        let mut a = args();
        a.show_coords = true;
        assert_eq!(a.render_config().layers.last(), Some(&RenderLayer::DebugCoords));
        a.layers.push(RenderLayer::DebugCoords);
        let layers = a.render_config().layers;
        assert_eq!(layers.iter().filter(|l| **l == RenderLayer::DebugCoords).count(), 1);
    }
}
