//! Layered hex rasterizer.
//!
//! Tiles are drawn as flat-top hexagons of circumradius `hex_size`. The
//! pixel bounding box of all tile hexes is centred in the canvas, so a
//! terrain document renders the same way whatever grid it came from.

use std::fmt;
use std::str::FromStr;

use hexmap_core::{AxialCoord, HexTile};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::colormap::{ColorScheme, SchemePalette};
use crate::error::RenderError;

pub const BACKGROUND: Rgba<u8> = Rgba([240, 248, 255, 255]);
const MARKER: Rgba<u8> = Rgba([255, 0, 0, 255]);
const WATER_ALPHA: u8 = 200;
const SQRT_3: f64 = 1.732_050_807_568_877_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderLayer {
    /// Every tile filled with its scheme colour.
    Elevation,
    /// Water tiles shaded by depth and blended over what is already drawn.
    Water,
    /// A small red cross at each tile centre.
    DebugCoords,
}

impl RenderLayer {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderLayer::Elevation => "elevation",
            RenderLayer::Water => "water",
            RenderLayer::DebugCoords => "debug_coords",
        }
    }
}

impl fmt::Display for RenderLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "elevation" => Ok(RenderLayer::Elevation),
            "water" => Ok(RenderLayer::Water),
            "debug_coords" | "coords" => Ok(RenderLayer::DebugCoords),
            _ => Err(format!("unknown render layer '{s}' (expected elevation, water or debug-coords)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    pub height: u32,
    /// Hex circumradius in pixels.
    pub hex_size: f64,
    /// Drawn in order.
    pub layers: Vec<RenderLayer>,
    pub color_scheme: ColorScheme,
    /// JPEG quality (1-100).
    pub quality: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            hex_size: 5.0,
            layers: vec![RenderLayer::Elevation],
            color_scheme: ColorScheme::Elevation,
            quality: 85,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.hex_size.is_finite() && self.hex_size > 0.0) {
            return Err(RenderError::InvalidConfig(format!("hex size must be positive, got {}", self.hex_size)));
        }
        if !(1..=100).contains(&self.quality) {
            return Err(RenderError::InvalidQuality(self.quality));
        }
        Ok(())
    }
}

pub struct HexRenderer {
    config: RenderConfig,
    palette: SchemePalette,
    canvas: RgbaImage,
}

impl HexRenderer {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let canvas = RgbaImage::from_pixel(config.width, config.height, BACKGROUND);
        let palette = SchemePalette::new(config.color_scheme);
        Ok(Self { config, palette, canvas })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    /// Clear the canvas and draw every configured layer.
    pub fn render(&mut self, tiles: &[HexTile]) -> &RgbaImage {
        for px in self.canvas.pixels_mut() {
            *px = BACKGROUND;
        }
        let layout = Layout::fit(tiles, &self.config);
        debug!(tiles = tiles.len(), layers = self.config.layers.len(), "rendering");

        for layer in self.config.layers.clone() {
            match layer {
                RenderLayer::Elevation => self.draw_elevation(tiles, &layout),
                RenderLayer::Water => self.draw_water(tiles, &layout),
                RenderLayer::DebugCoords => self.draw_markers(tiles, &layout),
            }
        }
        &self.canvas
    }

    pub fn color_for(&self, elevation: f64) -> Rgba<u8> {
        self.palette.color(elevation)
    }

    // ── Layers ──────────────────────────────────────────────────────────────

    fn draw_elevation(&mut self, tiles: &[HexTile], layout: &Layout) {
        for tile in tiles {
            let color = self.palette.color(tile.elevation);
            self.fill_hex(layout.center(tile.coordinates), color, false);
        }
    }

    fn draw_water(&mut self, tiles: &[HexTile], layout: &Layout) {
        for tile in tiles.iter().filter(|t| !t.is_land) {
            let color = water_color(tile.depth(0.0));
            self.fill_hex(layout.center(tile.coordinates), color, true);
        }
    }

    fn draw_markers(&mut self, tiles: &[HexTile], layout: &Layout) {
        for tile in tiles {
            let (cx, cy) = layout.center(tile.coordinates);
            let (x, y) = (cx.floor() as i64, cy.floor() as i64);
            for (dx, dy) in [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)] {
                self.put(x + dx, y + dy, MARKER);
            }
        }
    }

    // ── Rasterization ───────────────────────────────────────────────────────

    fn fill_hex(&mut self, (cx, cy): (f64, f64), color: Rgba<u8>, blend: bool) {
        let size = self.config.hex_size;
        let half_h = SQRT_3 / 2.0 * size;
        let x0 = (cx - size).floor() as i64;
        let x1 = (cx + size).ceil() as i64;
        let y0 = (cy - half_h).floor() as i64;
        let y1 = (cy + half_h).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                if point_in_hex(cx, cy, size, x as f64 + 0.5, y as f64 + 0.5) {
                    if blend {
                        self.blend(x, y, color);
                    } else {
                        self.put(x, y, color);
                    }
                }
            }
        }
    }

    fn put(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if let Some(px) = self.pixel_mut(x, y) {
            *px = color;
        }
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if let Some(px) = self.pixel_mut(x, y) {
            *px = blend_over(*px, color);
        }
    }

    fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut Rgba<u8>> {
        if x < 0 || y < 0 || x >= self.config.width as i64 || y >= self.config.height as i64 {
            return None;
        }
        Some(self.canvas.get_pixel_mut(x as u32, y as u32))
    }
}

/// Inside (or on the border of) a flat-top hexagon of circumradius `size`.
pub fn point_in_hex(cx: f64, cy: f64, size: f64, px: f64, py: f64) -> bool {
    let dx = (px - cx).abs();
    let dy = (py - cy).abs();
    dy <= SQRT_3 / 2.0 * size && SQRT_3 * dx + dy <= SQRT_3 * size
}

/// Blue deepening with depth, saturating at 1 km.
pub fn water_color(depth: f64) -> Rgba<u8> {
    let intensity = (depth / 1000.0).min(1.0);
    Rgba([0, 100, (50.0 + intensity * 150.0) as u8, WATER_ALPHA])
}

/// Source-over compositing onto an opaque destination.
fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let a = src[3] as u32;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
    Rgba([mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), 255])
}

/// Pixel placement of tile centres.
struct Layout {
    hex_size: f64,
    origin: (f64, f64),
}

impl Layout {
    fn fit(tiles: &[HexTile], config: &RenderConfig) -> Self {
        let size = config.hex_size;
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for tile in tiles {
            let (x, y) = tile.coordinates.to_pixel(size);
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
        let (w, h) = (config.width as f64, config.height as f64);
        let origin = if tiles.is_empty() {
            (w / 2.0, h / 2.0)
        } else {
            (w / 2.0 - (min.0 + max.0) / 2.0, h / 2.0 - (min.1 + max.1) / 2.0)
        };
        Self { hex_size: size, origin }
    }

    fn center(&self, c: AxialCoord) -> (f64, f64) {
        let (x, y) = c.to_pixel(self.hex_size);
        (self.origin.0 + x, self.origin.1 + y)
    }
}
